//! Core display operations

use embedded_hal::delay::DelayNs;
use log::{debug, error, info};

use crate::command::{
    BORDER_WAVEFORM, CTRL2_PARTIAL_REFRESH, CTRL2_POWER_ON, DATA_ENTRY_MODE, DEEP_SLEEP,
    DISPLAY_UPDATE_CTRL1, DISPLAY_UPDATE_CTRL2, DRIVER_OUTPUT_CONTROL, MASTER_ACTIVATION,
    SET_RAM_X_COUNTER, SET_RAM_X_RANGE, SET_RAM_Y_COUNTER, SET_RAM_Y_RANGE, SOFT_RESET,
    TEMP_SENSOR_CONTROL, WRITE_LUT, WRITE_RAM_CURRENT, WRITE_RAM_PREVIOUS,
};
use crate::config::Config;
use crate::error::{BuilderError, Error};
use crate::interface::DisplayInterface;
use crate::lut::LUT_PARTIAL;
use crate::storage::ShadowStore;
use crate::{BUFFER_SIZE, HEIGHT, WIDTH};

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Nominal duration of a full refresh in milliseconds (for caller scheduling)
pub const FULL_REFRESH_TIME_MS: u32 = 1200;

/// Nominal duration of a partial refresh in milliseconds (for caller scheduling)
pub const PARTIAL_REFRESH_TIME_MS: u32 = 300;

/// Settle time after switching the analog rail on
const POWER_ON_DELAY_MS: u32 = 80;

/// Settle time after switching the analog rail off
const POWER_OFF_DELAY_MS: u32 = 80;

/// Settle time around each RAM transfer phase
const FRAME_PHASE_DELAY_MS: u32 = 2;

/// Core driver for the DEPG0266BN panel
///
/// Owns the shadow copy of the last frame sent to the panel (through a
/// [`ShadowStore`]) and drives the controller's refresh protocol. The frame
/// buffer itself lives with the caller; for embedded-graphics support wrap
/// this in `GraphicDisplay` (requires the `graphics` feature).
///
/// All operations are synchronous: [`refresh`](Self::refresh) blocks the
/// caller for the whole cycle (roughly [`FULL_REFRESH_TIME_MS`] /
/// [`PARTIAL_REFRESH_TIME_MS`]). The driver assumes exclusive ownership of
/// the bus and pins; there is no cancellation, and an interrupted cycle
/// leaves the panel in an undefined electrical state.
pub struct Display<I, S>
where
    I: DisplayInterface,
    S: ShadowStore,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Last frame physically sent to the panel, plus the refresh counter
    shadow: S,
    /// Whether the analog rail is currently on
    power_is_on: bool,
}

impl<I, S> Display<I, S>
where
    I: DisplayInterface,
    S: ShadowStore,
{
    /// Create a new Display instance
    ///
    /// Initializes the shadow store; on first use it comes up all white to
    /// match the panel RAM after reset.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Storage`] if the store cannot provide its backing
    /// memory (e.g. heap exhaustion); the driver is not constructed.
    pub fn new(interface: I, config: Config, mut shadow: S) -> Result<Self, Error<I>> {
        if let Err(e) = shadow.init() {
            error!("Could not initialize shadow buffer for display: {e}");
            return Err(Error::Storage(e));
        }
        Ok(Self {
            interface,
            config,
            shadow,
            power_is_on: false,
        })
    }

    /// Perform one refresh cycle, blocking until the panel is idle again
    ///
    /// Chooses a full refresh when the counter has wrapped to zero and a
    /// partial refresh otherwise, then: resets and reconfigures the
    /// controller, addresses the full panel window, powers the rail up
    /// (uploading the partial waveform for partial mode, order per
    /// [`Config::lut_after_power_on`]), streams the previous frame from the
    /// shadow and the new frame from `frame` (updating the shadow in the
    /// same pass), activates the update sequence and waits for BUSY to
    /// clear. The counter advances modulo
    /// [`Config::full_update_every`] afterwards.
    ///
    /// A full refresh's activation flag drops the analog rail, so the panel
    /// is powered off when it completes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::BufferTooSmall`] if `frame` is shorter than
    /// [`BUFFER_SIZE`]; [`Error::Interface`] on bus/pin errors or when the
    /// panel never reports idle (fatal, the counter does not advance). Note
    /// that a bus error after the current-image transfer leaves the shadow
    /// ahead of what the panel actually latched; the next full refresh
    /// resynchronizes them.
    pub fn refresh<D: DelayNs>(&mut self, frame: &[u8], delay: &mut D) -> DisplayResult<I> {
        if frame.len() < BUFFER_SIZE {
            return Err(Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided: frame.len(),
            });
        }

        let full = self.shadow.updates() == 0;
        debug!(
            "Refreshing display ({})",
            if full { "full" } else { "partial" }
        );

        self.init_panel(delay)?;

        if full {
            self.power_on(delay)?;
        } else if self.config.lut_after_power_on {
            self.power_on(delay)?;
            self.busy_wait(delay)?;
            self.write_lut()?;
        } else {
            self.write_lut()?;
            self.power_on(delay)?;
        }

        // Previous image first, so the controller can diff against it
        self.send_command(WRITE_RAM_PREVIOUS)?;
        delay.delay_ms(FRAME_PHASE_DELAY_MS);
        self.interface
            .send_data(self.shadow.read())
            .map_err(Error::Interface)?;
        delay.delay_ms(FRAME_PHASE_DELAY_MS);

        // Current image; the shadow follows in the same pass, in the same
        // byte order as the transfer
        self.send_command(WRITE_RAM_CURRENT)?;
        delay.delay_ms(FRAME_PHASE_DELAY_MS);
        self.send_data(&frame[..BUFFER_SIZE])?;
        self.shadow.write(frame);
        delay.delay_ms(FRAME_PHASE_DELAY_MS);

        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        if full {
            self.send_data(&[self.config.full_refresh_flag])?;
            // The full-refresh sequence disables the analog rail on its way out
            self.power_is_on = false;
        } else {
            self.send_data(&[CTRL2_PARTIAL_REFRESH])?;
        }
        self.send_command(MASTER_ACTIVATION)?;

        if let Err(e) = self.interface.busy_wait(delay) {
            error!("Panel did not return to idle; treating it as non-responsive");
            return Err(Error::Interface(e));
        }

        let next = self.shadow.updates().wrapping_add(1) % self.config.full_update_every;
        self.shadow.set_updates(next);

        Ok(())
    }

    /// Hardware + software reset and base register configuration
    fn init_panel<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.reset(delay);

        self.send_command(SOFT_RESET)?;
        self.busy_wait(delay)?;

        // Driver output control: gate line count and scan order
        self.send_command(DRIVER_OUTPUT_CONTROL)?;
        self.send_data(&[
            ((HEIGHT - 1) % 256) as u8,
            ((HEIGHT - 1) / 256) as u8,
            self.config.gate_scanning,
        ])?;

        self.send_command(BORDER_WAVEFORM)?;
        self.send_data(&[self.config.border_waveform])?;

        let update_control1 = self.config.update_control1;
        self.send_command(DISPLAY_UPDATE_CTRL1)?;
        self.send_data(&update_control1)?;

        self.send_command(TEMP_SENSOR_CONTROL)?;
        self.send_data(&[self.config.temp_sensor_control])?;

        self.set_data_entry_mode()
    }

    /// Program the address counter direction, window and write pointer
    fn set_data_entry_mode(&mut self) -> DisplayResult<I> {
        self.send_command(DATA_ENTRY_MODE)?;
        self.send_data(&[self.config.data_entry_mode])?;
        self.set_ram_window()?;
        self.set_ram_pointer()
    }

    /// Set the RAM window to the whole panel, anchored at the origin
    ///
    /// Partial mode reuses the full window too; only the waveform differs.
    fn set_ram_window(&mut self) -> DisplayResult<I> {
        let x_end = ((WIDTH - 1) / 8) as u8;
        let y_end = HEIGHT - 1;

        self.send_command(SET_RAM_X_RANGE)?;
        self.send_data(&[0x00, x_end])?;

        self.send_command(SET_RAM_Y_RANGE)?;
        self.send_data(&[0x00, 0x00, (y_end % 256) as u8, (y_end / 256) as u8])?;

        Ok(())
    }

    /// Point the RAM write pointer at the origin
    fn set_ram_pointer(&mut self) -> DisplayResult<I> {
        self.send_command(SET_RAM_X_COUNTER)?;
        self.send_data(&[0x00])?;

        self.send_command(SET_RAM_Y_COUNTER)?;
        self.send_data(&[0x00, 0x00])?;

        Ok(())
    }

    /// Upload the partial-refresh waveform table
    fn write_lut(&mut self) -> DisplayResult<I> {
        self.send_command(WRITE_LUT)?;
        self.send_data(&LUT_PARTIAL)
    }

    /// Switch the analog rail on
    ///
    /// No-op if the rail is already on; otherwise stages the power-on
    /// sequence, activates it and blocks for the settle time.
    pub fn power_on<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if self.power_is_on {
            return Ok(());
        }
        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        self.send_data(&[CTRL2_POWER_ON])?;
        self.send_command(MASTER_ACTIVATION)?;
        delay.delay_ms(POWER_ON_DELAY_MS);
        self.power_is_on = true;
        Ok(())
    }

    /// Switch the analog rail off
    ///
    /// No-op if the rail is already off; otherwise stages the power-off
    /// sequence (flag per [`Config::power_off_flag`]), activates it and
    /// blocks for the settle time.
    pub fn power_off<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        if !self.power_is_on {
            return Ok(());
        }
        self.send_command(DISPLAY_UPDATE_CTRL2)?;
        self.send_data(&[self.config.power_off_flag])?;
        self.send_command(MASTER_ACTIVATION)?;
        delay.delay_ms(POWER_OFF_DELAY_MS);
        self.power_is_on = false;
        Ok(())
    }

    /// Power the panel down and enter deep sleep
    ///
    /// Only a hardware reset wakes the controller afterwards; the next
    /// [`refresh`](Self::refresh) performs one, so no explicit wake call is
    /// needed.
    pub fn deep_sleep<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.power_off(delay)?;
        self.send_command(DEEP_SLEEP)?;
        self.send_data(&[0x01])
    }

    /// Change how many partial refreshes run before a full refresh is forced
    ///
    /// # Errors
    ///
    /// Returns [`BuilderError::InvalidFullUpdateEvery`] for zero.
    pub fn set_full_update_every(&mut self, every: u8) -> Result<(), BuilderError> {
        if every == 0 {
            return Err(BuilderError::InvalidFullUpdateEvery);
        }
        self.config.full_update_every = every;
        Ok(())
    }

    /// Log the driver configuration
    pub fn log_config(&self) {
        info!("DEPG0266BN e-paper display");
        info!("  Model: 2.66in B");
        info!("  Size: {}x{}", WIDTH, HEIGHT);
        info!("  Full update every: {}", self.config.full_update_every);
        info!(
            "  Update flags: full={:#04X} power_off={:#04X} lut_after_power_on={}",
            self.config.full_refresh_flag, self.config.power_off_flag,
            self.config.lut_after_power_on
        );
    }

    /// Partial refreshes performed since the last full refresh
    ///
    /// Zero means the next [`refresh`](Self::refresh) will be a full one.
    pub fn updates_since_full(&self) -> u8 {
        self.shadow.updates()
    }

    /// Whether the analog rail is currently on
    pub fn is_powered_on(&self) -> bool {
        self.power_is_on
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Send a command to the display controller
    fn send_command(&mut self, cmd: u8) -> DisplayResult<I> {
        self.interface.send_command(cmd).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Wait for the panel to report idle
    fn busy_wait<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        self.interface.busy_wait(delay).map_err(Error::Interface)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CTRL2_FULL_REFRESH, CTRL2_POWER_OFF};
    use crate::config::{Builder, Revision};
    use crate::storage::VolatileStore;
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        commands: Vec<u8>,
        data: Vec<Vec<u8>>,
        command_data: Vec<(u8, Vec<u8>)>,
        last_command: Option<u8>,
        busy_calls: usize,
        fail_busy_on_call: Option<usize>,
    }

    impl MockInterface {
        fn new() -> Self {
            Self {
                commands: Vec::new(),
                data: Vec::new(),
                command_data: Vec::new(),
                last_command: None,
                busy_calls: 0,
                fail_busy_on_call: None,
            }
        }

        fn clear(&mut self) {
            self.commands.clear();
            self.data.clear();
            self.command_data.clear();
            self.last_command = None;
        }

        fn flag_writes(&self, flag: u8) -> usize {
            self.command_data
                .iter()
                .filter(|(cmd, data)| *cmd == DISPLAY_UPDATE_CTRL2 && data.as_slice() == &[flag][..])
                .count()
        }

        fn data_for(&self, command: u8) -> Option<&[u8]> {
            self.command_data
                .iter()
                .find(|(cmd, _)| *cmd == command)
                .map(|(_, data)| data.as_slice())
        }
    }

    impl DisplayInterface for MockInterface {
        type Error = &'static str;

        fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
            self.commands.push(command);
            self.last_command = Some(command);
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            if let Some(cmd) = self.last_command {
                self.command_data.push((cmd, data.to_vec()));
            }
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, delay: &mut D) {
            delay.delay_ms(10);
            delay.delay_ms(10);
        }

        fn busy_wait<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            let call = self.busy_calls;
            self.busy_calls += 1;
            if self.fail_busy_on_call == Some(call) {
                return Err("busy timeout");
            }
            Ok(())
        }
    }

    struct RecordingDelay {
        ms: Vec<u32>,
    }

    impl RecordingDelay {
        fn new() -> Self {
            Self { ms: Vec::new() }
        }
    }

    impl DelayNs for RecordingDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, ms: u32) {
            self.ms.push(ms);
        }
    }

    fn test_display(config: Config) -> Display<MockInterface, VolatileStore> {
        Display::new(MockInterface::new(), config, VolatileStore::new()).unwrap()
    }

    fn default_display() -> Display<MockInterface, VolatileStore> {
        test_display(Builder::new().build().unwrap())
    }

    fn white_frame() -> [u8; BUFFER_SIZE] {
        [0xFF; BUFFER_SIZE]
    }

    #[test]
    fn constructor_initializes_shadow_white() {
        let display = default_display();
        assert!(display.shadow.read().iter().all(|byte| *byte == 0xFF));
        assert_eq!(display.updates_since_full(), 0);
        assert!(!display.is_powered_on());
    }

    #[test]
    fn first_refresh_runs_full_sequence() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        // One colored corner pixel at (0,0)
        let mut frame = white_frame();
        frame[0] &= !0x80;

        display.refresh(&frame, &mut delay).unwrap();

        // reset+config, addressing, power on, both transfers, activation
        assert_eq!(
            display.interface.commands,
            alloc::vec![
                SOFT_RESET,
                DRIVER_OUTPUT_CONTROL,
                BORDER_WAVEFORM,
                DISPLAY_UPDATE_CTRL1,
                TEMP_SENSOR_CONTROL,
                DATA_ENTRY_MODE,
                SET_RAM_X_RANGE,
                SET_RAM_Y_RANGE,
                SET_RAM_X_COUNTER,
                SET_RAM_Y_COUNTER,
                DISPLAY_UPDATE_CTRL2,
                MASTER_ACTIVATION,
                WRITE_RAM_PREVIOUS,
                WRITE_RAM_CURRENT,
                DISPLAY_UPDATE_CTRL2,
                MASTER_ACTIVATION,
            ]
        );

        // Power-on flag staged first, full-refresh flag staged last
        assert_eq!(display.interface.flag_writes(CTRL2_POWER_ON), 1);
        assert_eq!(display.interface.flag_writes(CTRL2_FULL_REFRESH), 1);

        // No waveform upload on a full refresh
        assert!(!display.interface.commands.contains(&WRITE_LUT));

        // Previous plane got the all-white shadow, current plane the frame
        assert_eq!(
            display.interface.data_for(WRITE_RAM_PREVIOUS),
            Some(&white_frame()[..])
        );
        assert_eq!(display.interface.data_for(WRITE_RAM_CURRENT), Some(&frame[..]));

        assert_eq!(display.updates_since_full(), 1);
    }

    #[test]
    fn window_registers_cover_the_panel() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();
        display.refresh(&white_frame(), &mut delay).unwrap();

        // 151/8 = 18; 295 = 39 + 1*256
        assert_eq!(display.interface.data_for(SET_RAM_X_RANGE), Some(&[0x00, 18][..]));
        assert_eq!(
            display.interface.data_for(SET_RAM_Y_RANGE),
            Some(&[0x00, 0x00, 39, 1][..])
        );
        assert_eq!(display.interface.data_for(SET_RAM_X_COUNTER), Some(&[0x00][..]));
        assert_eq!(
            display.interface.data_for(SET_RAM_Y_COUNTER),
            Some(&[0x00, 0x00][..])
        );
        assert_eq!(
            display.interface.data_for(DRIVER_OUTPUT_CONTROL),
            Some(&[0x27, 0x01, 0x00][..])
        );
    }

    #[test]
    fn counter_forces_full_refresh_every_n_cycles() {
        let config = Builder::new().full_update_every(3).build().unwrap();
        let mut display = test_display(config);
        let mut delay = RecordingDelay::new();
        let frame = white_frame();

        for _ in 0..6 {
            display.refresh(&frame, &mut delay).unwrap();
        }

        // Cycles 1 and 4 are full, the other four partial
        assert_eq!(display.interface.flag_writes(CTRL2_FULL_REFRESH), 2);
        assert_eq!(display.interface.flag_writes(CTRL2_PARTIAL_REFRESH), 4);
        assert_eq!(
            display
                .interface
                .commands
                .iter()
                .filter(|cmd| **cmd == WRITE_LUT)
                .count(),
            4
        );
        assert_eq!(display.updates_since_full(), 0);
    }

    #[test]
    fn partial_refresh_uploads_waveform_after_power_on() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();
        let frame = white_frame();

        display.refresh(&frame, &mut delay).unwrap();
        display.interface.clear();
        display.refresh(&frame, &mut delay).unwrap();

        assert_eq!(
            display.interface.data_for(WRITE_LUT),
            Some(&LUT_PARTIAL[..])
        );

        // Default ordering: rail up, then waveform
        let commands = &display.interface.commands;
        let power_on = commands
            .iter()
            .position(|cmd| *cmd == DISPLAY_UPDATE_CTRL2)
            .unwrap();
        let lut = commands.iter().position(|cmd| *cmd == WRITE_LUT).unwrap();
        assert!(power_on < lut);
        assert_eq!(display.interface.flag_writes(CTRL2_PARTIAL_REFRESH), 1);
    }

    #[test]
    fn gdew_revision_uploads_waveform_before_power_on() {
        let config = Builder::new().revision(Revision::Gdew).build().unwrap();
        let mut display = test_display(config);
        let mut delay = RecordingDelay::new();
        let frame = white_frame();

        display.refresh(&frame, &mut delay).unwrap();
        display.interface.clear();
        display.refresh(&frame, &mut delay).unwrap();

        let commands = &display.interface.commands;
        let lut = commands.iter().position(|cmd| *cmd == WRITE_LUT).unwrap();
        let power_on = commands
            .iter()
            .position(|cmd| *cmd == DISPLAY_UPDATE_CTRL2)
            .unwrap();
        assert!(lut < power_on);
    }

    #[test]
    fn shadow_matches_frame_after_refresh() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        let mut frame = white_frame();
        frame[100] = 0x5A;
        frame[BUFFER_SIZE - 1] = 0x00;

        display.refresh(&frame, &mut delay).unwrap();
        assert_eq!(display.shadow.read(), &frame[..]);
    }

    #[test]
    fn second_refresh_streams_previous_frame_first() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        let mut first = white_frame();
        first[0] = 0x00;
        display.refresh(&first, &mut delay).unwrap();

        let mut second = white_frame();
        second[1] = 0x0F;
        display.interface.clear();
        display.refresh(&second, &mut delay).unwrap();

        assert_eq!(
            display.interface.data_for(WRITE_RAM_PREVIOUS),
            Some(&first[..])
        );
        assert_eq!(
            display.interface.data_for(WRITE_RAM_CURRENT),
            Some(&second[..])
        );
    }

    #[test]
    fn full_refresh_leaves_panel_powered_off() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();
        let frame = white_frame();

        display.refresh(&frame, &mut delay).unwrap();
        assert!(!display.is_powered_on());

        display.refresh(&frame, &mut delay).unwrap();
        assert!(display.is_powered_on());
    }

    #[test]
    fn power_on_is_idempotent() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        display.power_on(&mut delay).unwrap();
        display.power_on(&mut delay).unwrap();

        assert_eq!(
            display.interface.commands,
            alloc::vec![DISPLAY_UPDATE_CTRL2, MASTER_ACTIVATION]
        );
        assert_eq!(display.interface.flag_writes(CTRL2_POWER_ON), 1);
        assert_eq!(delay.ms, alloc::vec![POWER_ON_DELAY_MS]);
        assert!(display.is_powered_on());
    }

    #[test]
    fn power_off_is_idempotent_and_uses_configured_flag() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        // Already off: nothing on the wire
        display.power_off(&mut delay).unwrap();
        assert!(display.interface.commands.is_empty());

        display.power_on(&mut delay).unwrap();
        display.interface.clear();

        display.power_off(&mut delay).unwrap();
        display.power_off(&mut delay).unwrap();
        assert_eq!(display.interface.flag_writes(CTRL2_POWER_OFF), 1);
        assert!(!display.is_powered_on());
    }

    #[test]
    fn deep_sleep_powers_off_then_enters_sleep() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        display.power_on(&mut delay).unwrap();
        display.interface.clear();
        display.deep_sleep(&mut delay).unwrap();

        assert_eq!(
            display.interface.commands,
            alloc::vec![DISPLAY_UPDATE_CTRL2, MASTER_ACTIVATION, DEEP_SLEEP]
        );
        assert_eq!(display.interface.data_for(DEEP_SLEEP), Some(&[0x01][..]));
        assert!(!display.is_powered_on());
    }

    #[test]
    fn short_frame_is_rejected() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        let frame = [0xFFu8; 16];
        let result = display.refresh(&frame, &mut delay);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: BUFFER_SIZE,
                provided: 16
            })
        ));
        assert!(display.interface.commands.is_empty());
    }

    #[test]
    fn busy_timeout_is_fatal_and_keeps_counter() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        // First busy wait follows the soft reset; the second is the
        // post-activation wait
        display.interface.fail_busy_on_call = Some(1);

        let result = display.refresh(&white_frame(), &mut delay);
        assert!(matches!(result, Err(Error::Interface(_))));
        assert_eq!(display.updates_since_full(), 0);
    }

    #[test]
    fn set_full_update_every_validates_and_applies() {
        let mut display = default_display();
        let mut delay = RecordingDelay::new();

        assert!(matches!(
            display.set_full_update_every(0),
            Err(BuilderError::InvalidFullUpdateEvery)
        ));

        display.set_full_update_every(2).unwrap();
        let frame = white_frame();
        for _ in 0..4 {
            display.refresh(&frame, &mut delay).unwrap();
        }
        assert_eq!(display.interface.flag_writes(CTRL2_FULL_REFRESH), 2);
        assert_eq!(display.interface.flag_writes(CTRL2_PARTIAL_REFRESH), 2);
    }
}
