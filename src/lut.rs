//! Partial-refresh waveform table for the DEPG0266BN panel
//!
//! Full refreshes use the waveform stored in the controller's OTP memory and
//! need no table upload. Partial refreshes instead run from RAM: the 159-byte
//! table below is written through the `0x32` register before the update
//! sequence is activated.
//!
//! The byte values are the panel vendor's published partial waveform and are
//! part of the hardware contract; do not edit them. The layout is five
//! 12-byte voltage-source groups, twelve 7-byte phase timing groups, the
//! 9-byte frame-rate block, and a 6-byte end-option/driving-voltage tail.

/// Length of the partial-refresh waveform table in bytes
pub const LUT_SIZE: usize = 159;

/// Partial-refresh waveform, uploaded via [`WRITE_LUT`](crate::command::WRITE_LUT)
#[rustfmt::skip]
pub const LUT_PARTIAL: [u8; LUT_SIZE] = [
    // VS groups
    0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x80, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x40, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x80, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // TP phase timing
    0x0A, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // frame rates
    0x22, 0x22, 0x22, 0x22, 0x22, 0x22, 0x00, 0x00, 0x00,
    // end option, gate voltage, source voltages, VCOM
    0x22, 0x17, 0x41, 0xB0, 0x32, 0x36,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lut_has_contract_length() {
        assert_eq!(LUT_PARTIAL.len(), LUT_SIZE);
        assert_eq!(LUT_SIZE, 159);
    }

    #[test]
    fn lut_vs_groups_match_vendor_values() {
        assert_eq!(LUT_PARTIAL[1], 0x40);
        assert_eq!(LUT_PARTIAL[12], 0x80);
        assert_eq!(LUT_PARTIAL[13], 0x80);
        assert_eq!(LUT_PARTIAL[24], 0x40);
        assert_eq!(LUT_PARTIAL[37], 0x80);
    }

    #[test]
    fn lut_phase_timing_matches_vendor_values() {
        assert_eq!(LUT_PARTIAL[60], 0x0A);
        assert_eq!(LUT_PARTIAL[66], 0x02);
        assert_eq!(LUT_PARTIAL[67], 0x01);
        assert_eq!(LUT_PARTIAL[74], 0x01);
    }

    #[test]
    fn lut_frame_rate_block_and_tail_match_vendor_values() {
        assert_eq!(&LUT_PARTIAL[144..150], &[0x22; 6]);
        assert_eq!(&LUT_PARTIAL[153..], &[0x22, 0x17, 0x41, 0xB0, 0x32, 0x36]);
    }
}
