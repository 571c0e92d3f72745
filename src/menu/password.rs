//! Entering a Wi-Fi password one symbol at a time with four arrows.
//!
//! Every symbol has a 4-cell label that stays readable on a segment display, for example
//! `"↓A a"` for a lower-case `a` or `"↑1 !"` for the shifted `1`.

use heapless::Vec;

use super::{cycle_next, cycle_previous};

/// Longest WPA passphrase.
pub const MAX_PASSWORD_LEN: usize = 64;

/// A password character and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub ch: char,
    pub label: &'static str,
}

const fn symbol(ch: char, label: &'static str) -> Symbol {
    Symbol { ch, label }
}

/// Every symbol that can be entered, in cycling order.
pub const SYMBOLS: [Symbol; 94] = [
    symbol('a', "↓A a"),
    symbol('b', "↓B b"),
    symbol('c', "↓C c"),
    symbol('d', "↓D d"),
    symbol('e', "↓E e"),
    symbol('f', "↓F f"),
    symbol('g', "↓G g"),
    symbol('h', "↓H h"),
    symbol('i', "↓I i"),
    symbol('j', "↓J j"),
    symbol('k', "↓K k"),
    symbol('l', "↓L l"),
    symbol('m', "↓M m"),
    symbol('n', "↓N n"),
    symbol('o', "↓O o"),
    symbol('p', "↓P p"),
    symbol('q', "↓Q q"),
    symbol('r', "↓R r"),
    symbol('s', "↓S s"),
    symbol('t', "↓T t"),
    symbol('u', "↓U u"),
    symbol('v', "↓V v"),
    symbol('w', "↓W w"),
    symbol('x', "↓X x"),
    symbol('y', "↓Y y"),
    symbol('z', "↓Z z"),
    symbol('1', "N  1"),
    symbol('2', "N  2"),
    symbol('3', "N  3"),
    symbol('4', "N  4"),
    symbol('5', "N  5"),
    symbol('6', "N  6"),
    symbol('7', "N  7"),
    symbol('8', "N  8"),
    symbol('9', "N  9"),
    symbol('0', "N  0"),
    symbol('A', "↑A A"),
    symbol('B', "↑B B"),
    symbol('C', "↑C C"),
    symbol('D', "↑D D"),
    symbol('E', "↑E E"),
    symbol('F', "↑F F"),
    symbol('G', "↑G G"),
    symbol('H', "↑H H"),
    symbol('I', "↑I I"),
    symbol('J', "↑J J"),
    symbol('K', "↑K K"),
    symbol('L', "↑L L"),
    symbol('M', "↑M M"),
    symbol('N', "↑N N"),
    symbol('O', "↑O O"),
    symbol('P', "↑P P"),
    symbol('Q', "↑Q Q"),
    symbol('R', "↑R R"),
    symbol('S', "↑S S"),
    symbol('T', "↑T T"),
    symbol('U', "↑U U"),
    symbol('V', "↑V V"),
    symbol('W', "↑W W"),
    symbol('X', "↑X X"),
    symbol('Y', "↑Y Y"),
    symbol('Z', "↑Z Z"),
    symbol('-', "   -"),
    symbol('_', "   _"),
    symbol('[', "LB ["),
    symbol(']', "RB ]"),
    symbol('!', "↑1 !"),
    symbol('@', "↑2 @"),
    symbol('#', "↑3 #"),
    symbol('$', "↑4 $"),
    symbol('%', "↑5 %"),
    symbol('^', "↑6 ^"),
    symbol('&', "↑7 &"),
    symbol('*', "↑8 *"),
    symbol('(', "↑9 ("),
    symbol(')', "↑0 )"),
    symbol(',', "COM,"),
    symbol('.', "DOT."),
    symbol('?', "QUE?"),
    symbol('/', "SL /"),
    symbol('\\', "BSL\\"),
    symbol('~', "TLD~"),
    symbol('=', "EQL="),
    symbol('+', "PLS+"),
    symbol('{', "LC {"),
    symbol('}', "RC }"),
    symbol('|', "PIP|"),
    symbol('<', "LT <"),
    symbol('>', "GT >"),
    symbol(':', "COL:"),
    symbol(';', "SCL;"),
    symbol('\'', "SQ '"),
    symbol('"', "DQ \""),
    symbol(' ', "SPC "),
];

/// The password typed so far, as indices into [`SYMBOLS`].
///
/// There is always a symbol under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEntry {
    symbols: Vec<u8, MAX_PASSWORD_LEN>,
    cursor: usize,
    committed: bool,
}

impl Default for PasswordEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordEntry {
    #[must_use]
    pub fn new() -> Self {
        let mut symbols = Vec::new();
        // Capacity is at least one.
        let _ = symbols.push(0);
        Self {
            symbols,
            cursor: 0,
            committed: false,
        }
    }

    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// True after the password has been shown in full and is waiting for a second confirm.
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        self.committed
    }

    pub const fn commit(&mut self) {
        self.committed = true;
    }

    /// The symbol under the cursor.
    #[must_use]
    pub fn current(&self) -> Symbol {
        self.symbols
            .get(self.cursor)
            .and_then(|&index| SYMBOLS.get(usize::from(index)))
            .copied()
            .unwrap_or(SYMBOLS[0])
    }

    /// Next symbol at the cursor, wrapping to the first.
    pub fn next_symbol(&mut self) {
        self.update_current(|index| cycle_next(index, SYMBOLS.len()));
    }

    /// Previous symbol at the cursor, wrapping to the last.
    pub fn previous_symbol(&mut self) {
        self.update_current(|index| cycle_previous(index, SYMBOLS.len()));
    }

    /// Move right, starting a new symbol when moving past the end.
    ///
    /// Stays put once the password is [`MAX_PASSWORD_LEN`] symbols long.
    pub fn move_right(&mut self) {
        self.committed = false;
        let next = self.cursor.saturating_add(1);
        if next < self.symbols.len() || self.symbols.push(0).is_ok() {
            self.cursor = next;
        }
    }

    /// Move left, stopping at the first symbol.
    pub fn move_left(&mut self) {
        self.committed = false;
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// The plaintext password.
    #[must_use]
    pub fn password(&self) -> heapless::String<MAX_PASSWORD_LEN> {
        let mut password = heapless::String::new();
        for &index in &self.symbols {
            let ch = SYMBOLS.get(usize::from(index)).map_or(' ', |symbol| symbol.ch);
            // Every symbol is one ASCII byte and there are at most MAX_PASSWORD_LEN of them.
            let _ = password.push(ch);
        }
        password
    }

    fn update_current(&mut self, step: impl FnOnce(usize) -> usize) {
        self.committed = false;
        if let Some(index) = self.symbols.get_mut(self.cursor) {
            let next = step(usize::from(*index));
            *index = u8::try_from(next).unwrap_or(0);
        }
    }
}
