//! Run flags accepted by `vata` for every operation

/// Pre-processing pruning; `vata` accepts at most one of `-p` and `-s`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Prune {
    #[default]
    None,
    /// Prune unreachable states first (`-p`)
    Unreachable,
    /// Prune useless states first (`-s`), stronger than `Unreachable`
    Useless,
}

impl Prune {
    pub fn flag(self) -> Option<&'static str> {
        match self {
            Prune::None => None,
            Prune::Unreachable => Some("-p"),
            Prune::Useless => Some("-s"),
        }
    }
}

/// Flags that do not depend on the operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RunFlags {
    /// Print the time the operation took to stderr (`-t`)
    pub show_time: bool,
    /// `-v`
    pub verbose: bool,
    /// Do not print the result automaton (`-n`)
    pub dont_output_result: bool,
    pub prune: Prune,
}

impl RunFlags {
    /// Tokens for the enabled flags, in the fixed order `-t -v -n -p|-s`
    pub fn tokens(&self) -> Vec<&'static str> {
        let mut tokens = Vec::new();
        if self.show_time {
            tokens.push("-t");
        }
        if self.verbose {
            tokens.push("-v");
        }
        if self.dont_output_result {
            tokens.push("-n");
        }
        if let Some(flag) = self.prune.flag() {
            tokens.push(flag);
        }
        tokens
    }
}
