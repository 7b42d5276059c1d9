//! Chord command grammar.
//!
//! A chord is the pending command text accumulated in chord-entry mode,
//! introduced by `:` or `;` and committed on Enter. Parsing strips the
//! trigger character, takes the command name up to the first space, and
//! treats everything after that space as the argument string.

/// Target for the `l` (jump to line) command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTarget {
    /// 1-based line number, clamped to the document by the executor.
    Absolute(usize),
    /// `e`: the last line.
    Last,
}

/// A parsed chord command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `q`: terminate the session, discarding changes.
    Quit,
    /// `s` / `w`: persist the buffer.
    Save,
    /// `sq` / `wq`: persist, then terminate.
    SaveQuit,
    /// `i`: switch to insertion mode.
    EnterInsert,
    /// `l <n>`: jump the cursor to a line.
    JumpLine(LineTarget),
    /// `f <text>`: circular forward search.
    Find(String),
    /// `c <name>`: create/truncate an empty file, buffer unaffected.
    Create(String),
    /// `cswp <name>`: create/truncate an empty file and switch to it.
    CreateSwitch(String),
    /// `swp <name>`: persist, then switch to an existing file.
    SaveSwitch(String),
    /// Anything else.
    Unknown,
}

impl Command {
    /// Whether execution requires the file store (handled in the side-effect
    /// layer rather than the pure update).
    pub const fn touches_file_store(&self) -> bool {
        matches!(
            self,
            Self::Save | Self::SaveQuit | Self::Create(_) | Self::CreateSwitch(_) | Self::SaveSwitch(_)
        )
    }
}

/// Parse a committed chord, including its leading trigger character.
pub fn parse(chord: &str) -> Command {
    let body = chord.get(1..).unwrap_or_default();
    let (name, arg) = match body.split_once(' ') {
        Some((name, arg)) => (name, arg),
        None => (body, ""),
    };
    match name {
        "q" => Command::Quit,
        "s" | "w" => Command::Save,
        "sq" | "wq" => Command::SaveQuit,
        "i" => Command::EnterInsert,
        "l" => Command::JumpLine(parse_line_target(arg)),
        "f" => Command::Find(arg.to_string()),
        "c" => Command::Create(arg.trim().to_string()),
        "cswp" => Command::CreateSwitch(arg.trim().to_string()),
        "swp" => Command::SaveSwitch(arg.trim().to_string()),
        _ => Command::Unknown,
    }
}

// Empty, non-numeric, and zero arguments all degrade to line 1.
fn parse_line_target(arg: &str) -> LineTarget {
    let arg = arg.trim();
    if arg == "e" {
        return LineTarget::Last;
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => LineTarget::Absolute(n),
        _ => LineTarget::Absolute(1),
    }
}
