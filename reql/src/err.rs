/// Errors raised locally by the driver: I/O, (de)serialization, protocol
/// framing violations, or term-conversion failures. None of these involve a
/// round trip to the server.
#[derive(Debug, thiserror::Error)]
pub enum Driver {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The connection's reader loop exited (socket closed or errored) and
    /// every outstanding query on it has already been failed.
    #[error("connection is broken")]
    ConnectionBroken,

    /// A second concurrent query was attempted on a connection that is
    /// already streaming a changefeed.
    #[error("connection is locked by a running changefeed")]
    ConnectionLocked,

    /// `Session::close`/`reconnect` tore this connection down deliberately;
    /// distinct from [`Driver::ConnectionBroken`], which means the socket
    /// errored out on its own.
    #[error("connection was closed")]
    ConnectionClosed,

    /// `toReqlAst` recursed past its depth budget, which only happens on a
    /// pathological or self-referential host value.
    #[error("query term nesting exceeded the maximum depth")]
    DepthExceeded,

    #[error("{0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

/// The taxonomy of errors a running query can surface, per the wire
/// protocol's `ErrorType` tag on `RUNTIME_ERROR` responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    Internal,
    ResourceLimit,
    QueryLogic,
    NonExistence,
    OpFailed,
    OpIndeterminate,
    User,
    Permission,
}

impl RuntimeErrorKind {
    pub(crate) fn from_wire(tag: i32) -> Self {
        use ql2::response::ErrorType as E;
        match ql2_error_type(tag) {
            Some(E::Internal) => Self::Internal,
            Some(E::ResourceLimit) => Self::ResourceLimit,
            Some(E::QueryLogic) => Self::QueryLogic,
            Some(E::NonExistence) => Self::NonExistence,
            Some(E::OpFailed) => Self::OpFailed,
            Some(E::OpIndeterminate) => Self::OpIndeterminate,
            Some(E::User) => Self::User,
            Some(E::Permission) => Self::Permission,
            None => Self::Internal,
        }
    }
}

fn ql2_error_type(tag: i32) -> Option<ql2::response::ErrorType> {
    ql2::response::ErrorType::from_i32(tag)
}

/// The crate's result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong talking to a RethinkDB server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Driver(#[from] Driver),

    /// SCRAM handshake failure, or a server auth error (wire codes 10-20).
    #[error("authentication failed: {0}")]
    Auth(String),

    /// The server rejected the wire form of the query itself.
    #[error("client error: {message}")]
    Client {
        message: String,
        term: Option<serde_json::Value>,
    },

    /// The server rejected the query while compiling it.
    #[error("compile error: {message}")]
    Compile {
        message: String,
        term: Option<serde_json::Value>,
        backtrace: Option<serde_json::Value>,
    },

    /// The server failed the query while running it.
    #[error("runtime error ({kind:?}): {message}")]
    Runtime {
        kind: RuntimeErrorKind,
        message: String,
        backtrace: Option<serde_json::Value>,
    },
}

impl Error {
    pub(crate) fn from_error_response(
        typ: ql2::response::ResponseType,
        message: String,
        term: Option<serde_json::Value>,
        backtrace: Option<serde_json::Value>,
        error_type: Option<i32>,
    ) -> Self {
        use ql2::response::ResponseType as R;
        match typ {
            R::ClientError => Error::Client { message, term },
            R::CompileError => Error::Compile {
                message,
                term,
                backtrace,
            },
            R::RuntimeError => Error::Runtime {
                kind: error_type.map(RuntimeErrorKind::from_wire).unwrap_or(RuntimeErrorKind::Internal),
                message,
                backtrace,
            },
            _ => Error::Driver(Driver::Other(message)),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Driver(Driver::from(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Driver(Driver::from(err))
    }
}
