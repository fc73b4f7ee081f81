use crate::Command;
use ql2::term::TermType;

/// A lambda captured by the `func!` macro: the variable ids the server will
/// bind arguments to, plus the already-built body term referencing them via
/// `Command::var`.
///
/// Lowers to `[FUNC, [MAKE_ARRAY varIds], body]` on the wire.
pub struct Func {
    ids: Vec<u64>,
    body: Command,
}

impl Func {
    pub fn new(ids: Vec<u64>, body: Command) -> Self {
        Self { ids, body }
    }

    pub fn into_cmd(self) -> Command {
        let ids = self
            .ids
            .into_iter()
            .fold(Command::new(TermType::MakeArray), |cmd, id| {
                cmd.with_arg(Command::from_json(id))
            });
        Command::new(TermType::Func)
            .with_arg(ids)
            .with_arg(self.body)
    }
}
