//! HC32L110 flasher implementation.
//!
//! Drives the chip's ROM serial bootloader through three phases:
//!
//! 1. **Connect**: power-cycle via RTS, send the auto-baud training
//!    pattern while the boot window is open, and wait for the ROM ack.
//! 2. **Install**: announce the RAM loader, stream its image, then
//!    trigger execution and absorb the loader's startup burst.
//! 3. **Operate**: exchange checksummed command frames with the running
//!    loader to read, program, or erase flash in 512-byte chunks.
//!
//! Generic over the port type `P`, which must implement the `Port` trait,
//! so the whole protocol can be exercised against a scripted port.

use std::io::Write;
use std::thread;

use log::{debug, info, trace};

use crate::error::{Error, Result};
use crate::port::Port;
use crate::protocol::frame::{CommandFrame, HANDSHAKE_ACK, MAX_CHUNK, RESP_HEADER_LEN};
use crate::protocol::reader::{await_ack, await_byte_count, await_byte_equal, await_response, ResponseShape};
use crate::session::SessionState;
use crate::target::chip::{check_region, ChipConfig, EraseTarget};
use crate::target::hc32l110::assets::{EXECUTE, EXECUTE_ACK_COUNT, RAMCODE, TRAINING_PATTERN, UPLOAD};

/// HC32L110 flasher.
pub struct Hc32l110Flasher<P: Port> {
    port: P,
    config: ChipConfig,
    state: SessionState,
}

impl<P: Port> Hc32l110Flasher<P> {
    /// Create a flasher with an already opened port.
    pub fn new(mut port: P, config: ChipConfig) -> Self {
        // Short blocking-read timeout so receive loops can poll their
        // own deadlines.
        let _ = port.set_timeout(config.poll_interval);
        Self {
            port,
            config,
            state: SessionState::Disconnected,
        }
    }

    /// Current session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    fn require_state(&self, wanted: SessionState, doing: &str) -> Result<()> {
        if self.state != wanted {
            return Err(Error::Protocol(format!(
                "cannot {doing} in state {:?}",
                self.state
            )));
        }
        Ok(())
    }

    /// Power-cycle the device and perform the serial handshake.
    ///
    /// RTS gates the device's supply: asserting it powers the chip down,
    /// releasing it opens the ROM's boot window. The training pattern has
    /// to be on the wire when that window opens, so it is queued first.
    pub fn connect(&mut self) -> Result<()> {
        self.require_state(SessionState::Disconnected, "connect")?;

        info!("Power-cycling device on {}...", self.port.name());
        self.port.clear_buffers()?;
        self.port.set_rts(true)?;
        thread::sleep(self.config.power_cycle_delay);

        trace!("-> {} byte training pattern", TRAINING_PATTERN.len());
        self.port.write_all_bytes(&TRAINING_PATTERN)?;
        self.port.set_rts(false)?;

        await_byte_equal(
            &mut self.port,
            HANDSHAKE_ACK,
            self.config.handshake_timeout,
            "handshake ack",
        )?;
        info!("Handshake successful");

        // Let the ROM finish its post-handshake chatter, then discard it.
        thread::sleep(self.config.post_connect_delay);
        self.port.clear_buffers()?;

        self.state = SessionState::Connected;
        Ok(())
    }

    /// Upload the RAM loader and start it.
    pub fn install_loader(&mut self) -> Result<()> {
        self.require_state(SessionState::Connected, "install loader")?;

        debug!("Announcing loader upload");
        self.port.write_all_bytes(&UPLOAD)?;
        await_ack(&mut self.port, self.config.ack_timeout, "upload ack")?;
        thread::sleep(self.config.step_delay);

        debug!("Uploading loader ({} bytes)", RAMCODE.len());
        self.port.write_all_bytes(&RAMCODE)?;
        await_ack(&mut self.port, self.config.ramcode_timeout, "loader ack")?;
        thread::sleep(self.config.step_delay);
        self.state = SessionState::LoaderInstalled;

        debug!("Starting loader");
        self.port.write_all_bytes(&EXECUTE)?;
        await_byte_count(
            &mut self.port,
            EXECUTE_ACK_COUNT,
            self.config.execute_timeout,
            "loader startup",
        )?;
        thread::sleep(self.config.ready_delay);

        info!("Loader running");
        self.state = SessionState::Ready;
        Ok(())
    }

    fn send_frame(&mut self, frame: &CommandFrame) -> Result<()> {
        let data = frame.build();
        trace!("-> {:?} command, {} bytes", frame.sub_op(), data.len());
        self.port.write_all_bytes(&data)?;
        Ok(())
    }

    /// Read `len` bytes of flash starting at `addr` into `dest`.
    ///
    /// Chunks are verified and written out as they arrive, so a failure
    /// partway leaves `dest` holding every chunk read so far.
    pub fn read_flash<F>(
        &mut self,
        addr: u32,
        len: u32,
        dest: &mut dyn Write,
        mut progress: F,
    ) -> Result<()>
    where
        F: FnMut(usize, usize),
    {
        self.require_state(SessionState::Ready, "read flash")?;
        check_region(addr, len, self.config.family.flash_size())?;
        self.state = SessionState::Reading;

        let result = self.read_chunks(addr, len, dest, &mut progress);
        self.state = SessionState::Ready;
        result
    }

    fn read_chunks(
        &mut self,
        addr: u32,
        len: u32,
        dest: &mut dyn Write,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()> {
        let total = len as usize;
        let mut done = 0usize;

        info!("Reading {len} bytes from {addr:#06x}");
        while done < total {
            let chunk = (total - done).min(MAX_CHUNK);
            let chunk_addr = addr + done as u32;

            thread::sleep(self.config.chunk_settle);
            #[allow(clippy::cast_possible_truncation)] // chunk <= MAX_CHUNK
            self.send_frame(&CommandFrame::read(chunk_addr, chunk as u16))?;

            let resp = await_response(
                &mut self.port,
                ResponseShape::ReadData,
                self.config.response_timeout,
                "read response",
            )?;
            let payload = &resp[RESP_HEADER_LEN..resp.len() - 1];
            if payload.len() != chunk {
                return Err(Error::Protocol(format!(
                    "read response carried {} bytes, expected {chunk}",
                    payload.len()
                )));
            }

            dest.write_all(payload)?;
            done += chunk;
            progress(done, total);
        }
        dest.flush()?;

        debug!("Read complete");
        Ok(())
    }

    /// Program `data` into flash starting at `addr`.
    ///
    /// The target region must already be erased; programming does not
    /// erase first.
    pub fn write_flash<F>(&mut self, addr: u32, data: &[u8], mut progress: F) -> Result<()>
    where
        F: FnMut(usize, usize),
    {
        self.require_state(SessionState::Ready, "write flash")?;
        #[allow(clippy::cast_possible_truncation)] // capacity bounds the length
        check_region(addr, data.len() as u32, self.config.family.flash_size())?;
        self.state = SessionState::Writing;

        let result = self.write_chunks(addr, data, &mut progress);
        self.state = SessionState::Ready;
        result
    }

    fn write_chunks(
        &mut self,
        addr: u32,
        data: &[u8],
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()> {
        let total = data.len();
        let mut done = 0usize;

        info!("Writing {total} bytes to {addr:#06x}");
        while done < total {
            let chunk = (total - done).min(MAX_CHUNK);
            let chunk_addr = addr + done as u32;

            thread::sleep(self.config.chunk_settle);
            self.send_frame(&CommandFrame::write(chunk_addr, &data[done..done + chunk]))?;

            await_response(
                &mut self.port,
                ResponseShape::Ack,
                self.config.response_timeout,
                "write response",
            )?;

            done += chunk;
            progress(done, total);
        }

        debug!("Write complete");
        Ok(())
    }

    /// Erase the whole chip or a single sector.
    pub fn erase(&mut self, target: EraseTarget) -> Result<()> {
        self.require_state(SessionState::Ready, "erase flash")?;
        if let EraseTarget::Sector(addr) = target {
            check_region(addr, 1, self.config.family.flash_size())?;
        }
        self.state = SessionState::Erasing;

        let result = self.erase_inner(target);
        self.state = SessionState::Ready;
        result
    }

    fn erase_inner(&mut self, target: EraseTarget) -> Result<()> {
        let frame = match target {
            EraseTarget::Chip => {
                info!("Erasing entire flash");
                CommandFrame::chip_erase()
            }
            EraseTarget::Sector(addr) => {
                info!("Erasing sector at {addr:#06x}");
                CommandFrame::sector_erase(addr)
            }
        };

        self.send_frame(&frame)?;
        await_response(
            &mut self.port,
            ResponseShape::Ack,
            self.config.response_timeout,
            "erase response",
        )?;

        debug!("Erase complete");
        Ok(())
    }

    /// Close the flasher and release the port.
    pub fn close(&mut self) -> Result<()> {
        if self.state == SessionState::Closed {
            return Ok(());
        }
        self.state = SessionState::Closed;
        self.port.close()
    }
}

mod native_impl {
    use super::Hc32l110Flasher;
    use crate::error::Result;
    use crate::port::{NativePort, SerialConfig};
    use crate::target::chip::{ChipConfig, ChipFamily};

    impl Hc32l110Flasher<NativePort> {
        /// Open a serial port and wrap it in a flasher.
        ///
        /// The bootloader only speaks 9600 baud 8N1, so the port settings
        /// are fixed.
        ///
        /// # Arguments
        ///
        /// * `port_name` - Serial port name (e.g., "/dev/ttyUSB0" or "COM3")
        pub fn open(port_name: &str) -> Result<Self> {
            let config = ChipConfig::new(ChipFamily::Hc32l110);
            let serial = SerialConfig::new(port_name, 9600).with_timeout(config.poll_interval);
            let port = NativePort::open(&serial)?;
            Ok(Self::new(port, config))
        }
    }
}

impl<P: Port> crate::target::Flasher for Hc32l110Flasher<P> {
    fn connect(&mut self) -> Result<()> {
        self.connect()
    }

    fn install_loader(&mut self) -> Result<()> {
        self.install_loader()
    }

    fn read_flash(
        &mut self,
        addr: u32,
        len: u32,
        dest: &mut dyn Write,
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()> {
        self.read_flash(addr, len, dest, progress)
    }

    fn write_flash(
        &mut self,
        addr: u32,
        data: &[u8],
        progress: &mut dyn FnMut(usize, usize),
    ) -> Result<()> {
        self.write_flash(addr, data, progress)
    }

    fn erase(&mut self, target: EraseTarget) -> Result<()> {
        self.erase(target)
    }

    fn state(&self) -> SessionState {
        self.state()
    }

    fn close(&mut self) -> Result<()> {
        self.close()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::port::mock::MockPort;
    use crate::protocol::checksum::sum8;
    use crate::protocol::frame::{FRAME_MARKER, SUCCESS_ACK};

    fn flasher_with(port: MockPort) -> Hc32l110Flasher<MockPort> {
        Hc32l110Flasher::new(port, ChipConfig::immediate())
    }

    fn read_resp(addr: u32, payload: &[u8]) -> Vec<u8> {
        let mut resp = vec![FRAME_MARKER, 0];
        resp.extend_from_slice(&addr.to_le_bytes());
        resp.extend_from_slice(&(payload.len() as u16).to_le_bytes());
        resp.extend_from_slice(payload);
        resp.push(sum8(&resp));
        resp
    }

    fn ack_resp() -> Vec<u8> {
        let mut resp = vec![FRAME_MARKER, 0, 0, 0, 0, 0, 0, 0];
        resp.push(sum8(&resp));
        resp
    }

    fn connect_script() -> Vec<u8> {
        vec![HANDSHAKE_ACK]
    }

    fn install_script() -> Vec<u8> {
        let mut script = vec![SUCCESS_ACK, SUCCESS_ACK];
        script.extend_from_slice(&[0u8; EXECUTE_ACK_COUNT]);
        script
    }

    fn ready_flasher(extra_rx: &[u8]) -> Hc32l110Flasher<MockPort> {
        let mut port = MockPort::new();
        port.push_rx(&connect_script());
        port.push_rx(&install_script());
        port.push_rx(extra_rx);
        let mut flasher = flasher_with(port);
        flasher.connect().unwrap();
        flasher.install_loader().unwrap();
        flasher
    }

    #[test]
    fn test_connect_power_cycles_then_trains() {
        let mut port = MockPort::new();
        port.push_rx(&connect_script());
        let mut flasher = flasher_with(port);
        flasher.connect().unwrap();

        assert_eq!(flasher.state(), SessionState::Connected);
        assert_eq!(flasher.port.rts, vec![true, false]);
        assert_eq!(flasher.port.written(), TRAINING_PATTERN.to_vec());
        // Buffers flushed before training and again after the handshake
        assert_eq!(flasher.port.clears, 2);
    }

    #[test]
    fn test_connect_timeout_writes_nothing_further() {
        let port = MockPort::new();
        let mut flasher = flasher_with(port);
        let err = flasher.connect().unwrap_err();

        assert!(matches!(err, Error::Timeout { .. }));
        assert_eq!(flasher.state(), SessionState::Disconnected);
        // Only the training pattern went out
        assert_eq!(flasher.port.written(), TRAINING_PATTERN.to_vec());
    }

    #[test]
    fn test_connect_stray_byte_is_hard_failure() {
        let mut port = MockPort::new();
        port.push_rx(&[0x7F]);
        let mut flasher = flasher_with(port);
        let err = flasher.connect().unwrap_err();
        assert!(matches!(
            err,
            Error::UnexpectedByte {
                expected: HANDSHAKE_ACK,
                actual: 0x7F
            }
        ));
    }

    #[test]
    fn test_install_loader_sends_three_steps_in_order() {
        let flasher = ready_flasher(&[]);
        assert_eq!(flasher.state(), SessionState::Ready);

        let written = flasher.port.written();
        let mut offset = TRAINING_PATTERN.len();
        assert_eq!(&written[offset..offset + UPLOAD.len()], &UPLOAD);
        offset += UPLOAD.len();
        assert_eq!(&written[offset..offset + RAMCODE.len()], &RAMCODE);
        offset += RAMCODE.len();
        assert_eq!(&written[offset..offset + EXECUTE.len()], &EXECUTE);
        assert_eq!(written.len(), offset + EXECUTE.len());
    }

    #[test]
    fn test_install_loader_nack_stops_before_ramcode() {
        let mut port = MockPort::new();
        port.push_rx(&connect_script());
        port.push_rx(&[0x55]);
        let mut flasher = flasher_with(port);
        flasher.connect().unwrap();

        let err = flasher.install_loader().unwrap_err();
        assert!(matches!(err, Error::Nack { actual: 0x55 }));
        // Loader image never hit the wire
        let written = flasher.port.written();
        assert_eq!(written.len(), TRAINING_PATTERN.len() + UPLOAD.len());
    }

    #[test]
    fn test_install_requires_connected_state() {
        let port = MockPort::new();
        let mut flasher = flasher_with(port);
        let err = flasher.install_loader().unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }

    #[test]
    fn test_read_single_chunk() {
        let payload: Vec<u8> = (0u16..64).map(|b| b as u8).collect();
        let mut flasher = ready_flasher(&read_resp(0x100, &payload));

        let mut out = Vec::new();
        let mut seen = Vec::new();
        flasher
            .read_flash(0x100, 64, &mut out, |done, total| seen.push((done, total)))
            .unwrap();

        assert_eq!(out, payload);
        assert_eq!(seen, vec![(64, 64)]);
        assert_eq!(flasher.state(), SessionState::Ready);
    }

    #[test]
    fn test_read_splits_at_chunk_boundary() {
        // 1025 bytes = 512 + 512 + 1
        let image: Vec<u8> = (0..1025u32).map(|i| (i % 251) as u8).collect();
        let mut rx = Vec::new();
        rx.extend_from_slice(&read_resp(0, &image[..512]));
        rx.extend_from_slice(&read_resp(512, &image[512..1024]));
        rx.extend_from_slice(&read_resp(1024, &image[1024..]));
        let mut flasher = ready_flasher(&rx);

        let mut out = Vec::new();
        let mut seen = Vec::new();
        flasher
            .read_flash(0, 1025, &mut out, |done, total| seen.push((done, total)))
            .unwrap();

        assert_eq!(out, image);
        assert_eq!(seen, vec![(512, 1025), (1024, 1025), (1025, 1025)]);
    }

    #[test]
    fn test_read_corrupt_chunk_keeps_earlier_output() {
        let first = vec![0xAB; 512];
        let mut rx = read_resp(0, &first);
        let mut bad = read_resp(512, &[0xCD; 16]);
        let last = bad.len() - 1;
        bad[last] ^= 0xFF;
        rx.extend_from_slice(&bad);
        let mut flasher = ready_flasher(&rx);

        let mut out = Vec::new();
        let err = flasher
            .read_flash(0, 528, &mut out, |_, _| {})
            .unwrap_err();

        assert!(matches!(err, Error::ChecksumMismatch { .. }));
        // First chunk was verified and delivered before the failure
        assert_eq!(out, first);
    }

    #[test]
    fn test_read_rejects_out_of_range_before_io() {
        let mut flasher = ready_flasher(&[]);
        let before = flasher.port.writes.len();

        let mut out = Vec::new();
        let err = flasher
            .read_flash(0x3F00, 0x200, &mut out, |_, _| {})
            .unwrap_err();

        assert!(matches!(err, Error::Range { .. }));
        assert_eq!(flasher.port.writes.len(), before);
        assert_eq!(flasher.state(), SessionState::Ready);
    }

    #[test]
    fn test_write_chunks_and_frames() {
        let data: Vec<u8> = (0..600u32).map(|i| i as u8).collect();
        let mut rx = ack_resp();
        rx.extend_from_slice(&ack_resp());
        let mut flasher = ready_flasher(&rx);

        let mut seen = Vec::new();
        flasher
            .write_flash(0x80, &data, |done, total| seen.push((done, total)))
            .unwrap();
        assert_eq!(seen, vec![(512, 600), (600, 600)]);

        // Two write frames after the install traffic
        let frames = &flasher.port.writes[flasher.port.writes.len() - 2..];
        let first = &frames[0];
        assert_eq!(first[0], FRAME_MARKER);
        assert_eq!(first[1], 0x04);
        assert_eq!(&first[2..6], &0x80u32.to_le_bytes());
        assert_eq!(&first[6..8], &512u16.to_le_bytes());
        assert_eq!(first.len(), 8 + 512 + 1);

        let second = &frames[1];
        assert_eq!(&second[2..6], &(0x80u32 + 512).to_le_bytes());
        assert_eq!(&second[6..8], &88u16.to_le_bytes());
    }

    #[test]
    fn test_write_rejects_region_past_capacity() {
        let mut flasher = ready_flasher(&[]);
        let before = flasher.port.writes.len();

        let err = flasher
            .write_flash(0x3F00, &[0u8; 0x200], |_, _| {})
            .unwrap_err();
        assert!(matches!(err, Error::Range { .. }));
        assert_eq!(flasher.port.writes.len(), before);
    }

    #[test]
    fn test_chip_erase_frame_shape() {
        let mut flasher = ready_flasher(&ack_resp());
        flasher.erase(EraseTarget::Chip).unwrap();

        let frame = flasher.port.writes.last().unwrap();
        assert_eq!(frame[0], FRAME_MARKER);
        assert_eq!(frame[1], 0x02);
        assert_eq!(&frame[2..8], &[0u8; 6]);
        assert_eq!(frame[8], sum8(&frame[..8]));
    }

    #[test]
    fn test_sector_erase_frame_carries_address() {
        let mut flasher = ready_flasher(&ack_resp());
        flasher.erase(EraseTarget::Sector(0x1200)).unwrap();

        let frame = flasher.port.writes.last().unwrap();
        assert_eq!(frame[1], 0x03);
        assert_eq!(&frame[2..6], &0x1200u32.to_le_bytes());
    }

    #[test]
    fn test_erase_bad_status_reported() {
        let mut flasher = ready_flasher(&[FRAME_MARKER, 0x06]);
        let err = flasher.erase(EraseTarget::Chip).unwrap_err();
        assert!(matches!(err, Error::Status { status: 0x06 }));
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut flasher = ready_flasher(&[]);
        flasher.close().unwrap();
        assert_eq!(flasher.state(), SessionState::Closed);
        assert!(flasher.port.closed);
        flasher.close().unwrap();
    }

    #[test]
    fn test_operations_rejected_after_close() {
        let mut flasher = ready_flasher(&[]);
        flasher.close().unwrap();
        let err = flasher.erase(EraseTarget::Chip).unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));
    }
}
