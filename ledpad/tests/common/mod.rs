#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use ledpad::config::{SWITCH_COLS, SWITCH_ROWS};
use ledpad::{CounterDebouncer, EventSink, KeyEvent, PadPolarity, ReferenceScanner};

pub const ROWS: usize = SWITCH_ROWS;
pub const COLS: usize = SWITCH_COLS;

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

/// Line driven by the scanner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    SwitchRow(usize),
    LedRow(usize),
    LedCol(usize),
}

/// Electrical model of the reference pad.
///
/// Levels are `true` for high. Rows select on low, LEDs light on a high column of a selected
/// row, switch columns are pulled up and pulled low through a closed switch of a selected row.
#[derive(Debug, Default)]
pub struct Board {
    pub switch_rows: [bool; ROWS],
    pub led_rows: [bool; ROWS],
    pub led_cols: [bool; COLS],
    /// Physical contact state of every switch
    pub closed: [[bool; COLS]; ROWS],
    /// Switch columns whose reads fail
    pub faulty_cols: [bool; COLS],
    /// Every LED that was lit at some point since the last `take_lit`
    pub lit: BTreeSet<(usize, usize)>,
    /// Selected switch rows at each switch column read: (selected rows, col)
    pub reads: Vec<(Vec<usize>, usize)>,
}

impl Board {
    fn write(&mut self, line: Line, high: bool) {
        match line {
            Line::SwitchRow(r) => self.switch_rows[r] = high,
            Line::LedRow(r) => self.led_rows[r] = high,
            Line::LedCol(c) => self.led_cols[c] = high,
        }
        for r in 0..ROWS {
            for c in 0..COLS {
                if !self.led_rows[r] && self.led_cols[c] {
                    self.lit.insert((r, c));
                }
            }
        }
    }

    fn read(&mut self, col: usize) -> Result<bool, ErrorKind> {
        let selected = self.selected_switch_rows();
        self.reads.push((selected.clone(), col));
        if self.faulty_cols[col] {
            return Err(ErrorKind::Other);
        }
        let pulled_low = selected.iter().any(|&r| self.closed[r][col]);
        Ok(!pulled_low)
    }

    pub fn selected_switch_rows(&self) -> Vec<usize> {
        (0..ROWS).filter(|&r| !self.switch_rows[r]).collect()
    }

    pub fn selected_led_rows(&self) -> Vec<usize> {
        (0..ROWS).filter(|&r| !self.led_rows[r]).collect()
    }

    pub fn take_lit(&mut self) -> BTreeSet<(usize, usize)> {
        core::mem::take(&mut self.lit)
    }

    /// Whether every line is at its resting level
    pub fn is_idle(&self) -> bool {
        self.switch_rows.iter().all(|&h| h) && self.led_rows.iter().all(|&h| h) && self.led_cols.iter().all(|&h| !h)
    }
}

pub struct SimOutput {
    board: Rc<RefCell<Board>>,
    line: Line,
}

impl ErrorType for SimOutput {
    type Error = ErrorKind;
}

impl OutputPin for SimOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.board.borrow_mut().write(self.line, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.board.borrow_mut().write(self.line, true);
        Ok(())
    }
}

pub struct SimInput {
    board: Rc<RefCell<Board>>,
    col: usize,
}

impl ErrorType for SimInput {
    type Error = ErrorKind;
}

impl InputPin for SimInput {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.board.borrow_mut().read(self.col)
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        self.is_high().map(|high| !high)
    }
}

pub type TestScanner = ReferenceScanner<SimInput, SimOutput>;

/// Build a scanner wired to a fresh simulated board, with its lines parked
pub fn sim_pad() -> (Rc<RefCell<Board>>, TestScanner) {
    let board = Rc::new(RefCell::new(Board::default()));
    let output = |line| SimOutput {
        board: board.clone(),
        line,
    };
    let mut scanner = TestScanner::new(
        core::array::from_fn(|r| output(Line::SwitchRow(r))),
        core::array::from_fn(|r| output(Line::LedRow(r))),
        core::array::from_fn(|c| SimInput {
            board: board.clone(),
            col: c,
        }),
        core::array::from_fn(|c| output(Line::LedCol(c))),
        CounterDebouncer::new(),
        PadPolarity::REFERENCE,
    );
    scanner.init();
    (board, scanner)
}

/// Sink keeping every event it receives
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<KeyEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: KeyEvent) {
        self.events.push(event);
    }
}

/// Run one scan cycle per row, starting wherever the cursor is
pub fn scan_frame(scanner: &mut TestScanner, sink: &mut RecordingSink) {
    for _ in 0..ROWS {
        scanner.scan_cycle(sink);
    }
}
