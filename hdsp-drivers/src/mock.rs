//! Fake hardware for tests
//!
//! `FakeBoard` is a port expander with two emulated HDSP-2111 chips on it.
//! A chip latches the data port when its write cycle (CE low and WR low)
//! ends, and drives its control register onto the data port while its read
//! cycle (CE low and RD low) is active and the data port is an input.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use hdsp_core::display::Window;
use hdsp_hal::{Clock, Level, Port, PortExpander};

use crate::pins::{CELL_MASK, CHARACTER_RAM, CONTROL_IDLE, HDSP_CE1, HDSP_CE2, HDSP_RD, HDSP_WR};

/// Value returned by the first data-port read after turning it into an input
pub const STALE_READ: u8 = 0xA5;

/// One recorded expander or delay operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Begin(u8),
    Direction(u16),
    PortDirection(Port, u8),
    Pin(u8, Level),
    Write(Port, u8),
    Read(Port),
    Delay(u32),
}

pub type Log = Rc<RefCell<Vec<Op>>>;

/// One emulated display
#[derive(Debug, Clone, Default)]
pub struct FakeChip {
    pub cells: [u8; 8],
    pub control: u8,
    /// Snapshot of `cells` every time cell 7 is written
    pub frames: Vec<Window>,
    writing: bool,
}

impl FakeChip {
    pub fn shown(&self) -> &[u8; 8] {
        &self.cells
    }
}

pub struct FakeBoard {
    pub log: Log,
    pub chips: [FakeChip; 2],
    direction: u16,
    port_a: u8,
    port_b: u8,
    fresh_input: bool,
}

impl FakeBoard {
    pub fn new(log: Log) -> Self {
        Self {
            log,
            chips: [FakeChip::default(), FakeChip::default()],
            // Power-on default of the expander: everything input
            direction: 0xFFFF,
            // Board pull-ups hold the strobes released
            port_a: CONTROL_IDLE,
            port_b: 0,
            fresh_input: false,
        }
    }

    pub fn direction(&self) -> u16 {
        self.direction
    }

    pub fn line(&self, line: u8) -> bool {
        let port = if line < 8 { self.port_a } else { self.port_b };
        port & (1 << (line % 8)) != 0
    }

    /// Operations recorded so far
    pub fn ops(&self) -> Vec<Op> {
        self.log.borrow().clone()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }

    fn record(&self, op: Op) {
        self.log.borrow_mut().push(op);
    }

    fn selected(&self, chip: usize) -> bool {
        let ce = if chip == 0 { HDSP_CE1 } else { HDSP_CE2 };
        !self.line(ce)
    }

    fn update_chips(&mut self) {
        let address = self.port_a & (CHARACTER_RAM | CELL_MASK);
        let data = self.port_b;
        let wr_low = !self.line(HDSP_WR);
        for index in 0..self.chips.len() {
            let writing = self.selected(index) && wr_low;
            let chip = &mut self.chips[index];
            if chip.writing && !writing {
                if address & CHARACTER_RAM != 0 {
                    let cell = (address & CELL_MASK) as usize;
                    chip.cells[cell] = data;
                    if cell == 7 {
                        let cells = chip.cells;
                        chip.frames.push(cells);
                    }
                } else {
                    chip.control = data;
                }
            }
            chip.writing = writing;
        }
    }
}

impl PortExpander for FakeBoard {
    fn begin(&mut self, address: u8) {
        self.record(Op::Begin(address));
    }

    fn set_direction(&mut self, mask: u16) {
        self.record(Op::Direction(mask));
        self.direction = mask;
    }

    fn set_port_direction(&mut self, port: Port, mask: u8) {
        self.record(Op::PortDirection(port, mask));
        let shift = if port == Port::A { 0 } else { 8 };
        self.direction = (self.direction & !(0xFF << shift)) | ((mask as u16) << shift);
        if port == Port::B && mask != 0 {
            self.fresh_input = true;
        }
    }

    fn write_pin(&mut self, line: u8, level: Level) {
        self.record(Op::Pin(line, level));
        let (port, bit) = if line < 8 {
            (&mut self.port_a, line)
        } else {
            (&mut self.port_b, line - 8)
        };
        if level.is_high() {
            *port |= 1 << bit;
        } else {
            *port &= !(1 << bit);
        }
        self.update_chips();
    }

    fn write_port(&mut self, port: Port, value: u8) {
        self.record(Op::Write(port, value));
        match port {
            Port::A => self.port_a = value,
            Port::B => self.port_b = value,
        }
        self.update_chips();
    }

    fn read_port(&mut self, port: Port) -> u8 {
        self.record(Op::Read(port));
        match port {
            Port::A => self.port_a,
            Port::B => {
                if self.fresh_input {
                    self.fresh_input = false;
                    return STALE_READ;
                }
                let rd_low = !self.line(HDSP_RD);
                let driving = (0..self.chips.len()).find(|&i| self.selected(i) && rd_low);
                match driving {
                    Some(chip) if self.direction & 0xFF00 == 0xFF00 => self.chips[chip].control,
                    _ => self.port_b,
                }
            }
        }
    }
}

/// Delay that only records how long it was asked to wait
pub struct FakeDelay {
    log: Log,
}

impl FakeDelay {
    pub fn new(log: Log) -> Self {
        Self { log }
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Op::Delay(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Op::Delay(ms));
    }
}

/// Manually advanced clock
#[derive(Default)]
pub struct FakeClock {
    now: Cell<u32>,
}

impl FakeClock {
    pub fn set(&self, now_ms: u32) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u32) {
        self.now.set(self.now.get().wrapping_add(ms));
    }
}

impl Clock for FakeClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

/// Board and delay sharing one operation log
pub fn rig() -> (FakeBoard, FakeDelay) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    (FakeBoard::new(log.clone()), FakeDelay::new(log))
}
