//! Argument accepted by [`Connection::close`](crate::Connection::close).

/// Whether a running changefeed should be torn down immediately or only
/// after outstanding `noreply` writes on the connection have drained.
pub trait Arg {
    fn noreply_wait(&self) -> bool;
}

impl Arg for () {
    fn noreply_wait(&self) -> bool {
        true
    }
}

impl Arg for bool {
    fn noreply_wait(&self) -> bool {
        *self
    }
}
