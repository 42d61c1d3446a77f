//! Display configuration types and builder

use crate::command::{
    CTRL2_FULL_REFRESH, CTRL2_FULL_REFRESH_ALT, CTRL2_POWER_OFF, CTRL2_POWER_OFF_ALT,
};
pub use crate::error::BuilderError;

/// Known DEPG0266BN hardware revisions
///
/// The two register-level variants seen in the field disagree on the
/// full-refresh activation flag (0xF4 vs 0xF7), the power-off flag (0x83 vs
/// 0x03) and whether the partial waveform is uploaded before or after the
/// analog rail comes up. Neither has been confirmed authoritative against
/// all panel batches, so the choice stays with the caller; a preset sets
/// the three coherently.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Revision {
    /// Flags 0xF4/0x83, waveform uploaded after power-on (DEPG-marked panels)
    #[default]
    Depg,
    /// Flags 0xF7/0x03, waveform uploaded before power-on (GDEW-marked panels)
    Gdew,
}

/// Display configuration
///
/// This struct holds all configurable parameters for the panel controller.
/// Use [`Builder`] to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Partial refreshes allowed before a full refresh is forced
    pub full_update_every: u8,
    /// Gate scanning direction byte (third driver-output-control byte)
    pub gate_scanning: u8,
    /// Border waveform setting
    pub border_waveform: u8,
    /// Display update control 1 bytes
    pub update_control1: [u8; 2],
    /// Temperature sensor control (0x80 = internal sensor)
    pub temp_sensor_control: u8,
    /// Data entry mode byte
    pub data_entry_mode: u8,
    /// Display update sequence flag for a full refresh
    pub full_refresh_flag: u8,
    /// Display update sequence flag for power off
    pub power_off_flag: u8,
    /// Whether the partial waveform is uploaded after the analog rail is on
    pub lut_after_power_on: bool,
}

/// Builder for constructing display configuration
///
/// All fields have defaults matching the DEPG-marked panels; only
/// override what your panel batch needs.
///
/// # Example
///
/// ```
/// use depg0266bn::{Builder, Revision};
///
/// let config = Builder::new()
///     .revision(Revision::Gdew)
///     .full_update_every(10)
///     .build();
/// assert!(config.is_ok());
/// ```
#[must_use]
pub struct Builder {
    full_update_every: u8,
    gate_scanning: u8,
    border_waveform: u8,
    update_control1: [u8; 2],
    temp_sensor_control: u8,
    data_entry_mode: u8,
    full_refresh_flag: u8,
    power_off_flag: u8,
    lut_after_power_on: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            // One full refresh per 30 cycles keeps ghosting at bay without
            // paying the slow full-refresh cost too often
            full_update_every: 30,
            // Normal gate scan order
            gate_scanning: 0x00,
            // Border follows VBD/GS transition setting from the vendor init
            border_waveform: 0x05,
            // RAM plane routing from the vendor init
            update_control1: [0x00, 0x80],
            // Internal temperature sensor
            temp_sensor_control: 0x80,
            // X increment, Y increment, counter advances in X
            data_entry_mode: 0x03,
            full_refresh_flag: CTRL2_FULL_REFRESH,
            power_off_flag: CTRL2_POWER_OFF,
            lut_after_power_on: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with DEPG-revision defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all revision-dependent bytes from a known hardware revision
    pub fn revision(mut self, revision: Revision) -> Self {
        match revision {
            Revision::Depg => {
                self.full_refresh_flag = CTRL2_FULL_REFRESH;
                self.power_off_flag = CTRL2_POWER_OFF;
                self.lut_after_power_on = true;
            }
            Revision::Gdew => {
                self.full_refresh_flag = CTRL2_FULL_REFRESH_ALT;
                self.power_off_flag = CTRL2_POWER_OFF_ALT;
                self.lut_after_power_on = false;
            }
        }
        self
    }

    /// Set how many partial refreshes run before a full refresh is forced
    ///
    /// Must be at least 1; 1 means every refresh is a full refresh.
    pub fn full_update_every(mut self, every: u8) -> Self {
        self.full_update_every = every;
        self
    }

    /// Set gate scanning direction
    pub fn gate_scanning(mut self, value: u8) -> Self {
        self.gate_scanning = value;
        self
    }

    /// Set border waveform
    pub fn border_waveform(mut self, value: u8) -> Self {
        self.border_waveform = value;
        self
    }

    /// Set display update control 1 bytes
    pub fn update_control1(mut self, value: [u8; 2]) -> Self {
        self.update_control1 = value;
        self
    }

    /// Set temperature sensor control
    pub fn temp_sensor_control(mut self, value: u8) -> Self {
        self.temp_sensor_control = value;
        self
    }

    /// Set data entry mode
    pub fn data_entry_mode(mut self, value: u8) -> Self {
        self.data_entry_mode = value;
        self
    }

    /// Set the update sequence flag used for a full refresh
    ///
    /// 0xF4 on DEPG-marked panels, 0xF7 on GDEW-marked ones.
    pub fn full_refresh_flag(mut self, value: u8) -> Self {
        self.full_refresh_flag = value;
        self
    }

    /// Set the update sequence flag used to power the panel off
    ///
    /// 0x83 on DEPG-marked panels, 0x03 on GDEW-marked ones.
    pub fn power_off_flag(mut self, value: u8) -> Self {
        self.power_off_flag = value;
        self
    }

    /// Set whether the partial waveform is uploaded after power-on
    pub fn lut_after_power_on(mut self, value: bool) -> Self {
        self.lut_after_power_on = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidFullUpdateEvery`] if the refresh
    /// cadence is zero.
    pub fn build(self) -> Result<Config, BuilderError> {
        if self.full_update_every == 0 {
            return Err(BuilderError::InvalidFullUpdateEvery);
        }
        Ok(Config {
            full_update_every: self.full_update_every,
            gate_scanning: self.gate_scanning,
            border_waveform: self.border_waveform,
            update_control1: self.update_control1,
            temp_sensor_control: self.temp_sensor_control,
            data_entry_mode: self.data_entry_mode,
            full_refresh_flag: self.full_refresh_flag,
            power_off_flag: self.power_off_flag,
            lut_after_power_on: self.lut_after_power_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_depg_revision() {
        let config = Builder::new().build().unwrap();
        assert_eq!(config.full_update_every, 30);
        assert_eq!(config.full_refresh_flag, 0xF4);
        assert_eq!(config.power_off_flag, 0x83);
        assert!(config.lut_after_power_on);
        assert_eq!(config.data_entry_mode, 0x03);
        assert_eq!(config.border_waveform, 0x05);
        assert_eq!(config.temp_sensor_control, 0x80);
    }

    #[test]
    fn gdew_preset_sets_alternate_bytes() {
        let config = Builder::new().revision(Revision::Gdew).build().unwrap();
        assert_eq!(config.full_refresh_flag, 0xF7);
        assert_eq!(config.power_off_flag, 0x03);
        assert!(!config.lut_after_power_on);
    }

    #[test]
    fn zero_cadence_is_rejected() {
        let result = Builder::new().full_update_every(0).build();
        assert!(matches!(result, Err(BuilderError::InvalidFullUpdateEvery)));
    }

    #[test]
    fn cadence_of_one_forces_full_refresh_every_time() {
        let config = Builder::new().full_update_every(1).build().unwrap();
        assert_eq!(config.full_update_every, 1);
    }
}
