use lotto::domain::ports::NumberPicker;
use lotto::interfaces::console::Console;
use std::collections::VecDeque;
use std::io::Cursor;

/// Hands out predetermined tickets in order.
pub struct ScriptedPicker {
    draws: VecDeque<Vec<u8>>,
}

impl ScriptedPicker {
    pub fn new(draws: &[[u8; 6]]) -> Self {
        Self {
            draws: draws.iter().map(|d| d.to_vec()).collect(),
        }
    }
}

impl NumberPicker for ScriptedPicker {
    fn pick_unique(&mut self, _min: u8, _max: u8, _count: usize) -> Vec<u8> {
        self.draws.pop_front().expect("script ran out of tickets")
    }
}

pub type MemoryConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

pub fn memory_console(input: &str) -> MemoryConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn transcript(console: MemoryConsole) -> String {
    String::from_utf8(console.into_output()).expect("console output is UTF-8")
}
