//! Running a query: global options, the wire `Response` shape, the
//! fetch-mode prefetch policy, and the `Cursor` stream returned by
//! [`Command::run`].

use std::borrow::Cow;
use std::collections::VecDeque;
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;
use futures::Stream;
use serde::de::DeserializeOwned;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use ql2::query::QueryType;
use ql2::response::ResponseType;

use crate::cmd::options::Durability;
use crate::proto::{Command, Payload};
use crate::tools::StaticString;
use crate::{pseudo, Connection, Driver, Error, Result, Session};

#[derive(Debug, Clone)]
pub(crate) struct Db(pub(crate) Cow<'static, str>);

/// `"raw"` disables pseudo-type decoding for the corresponding wire field;
/// anything else (the default) leaves decoding on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Native,
    Raw,
}

impl Default for Format {
    fn default() -> Self {
        Self::Native
    }
}

impl Serialize for Format {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Native => "native".serialize(serializer),
            Self::Raw => "raw".serialize(serializer),
        }
    }
}

/// When a partial [`Cursor`] should eagerly send `CONTINUE` before its local
/// buffer runs dry. `buffered` is the number of items still sitting in the
/// cursor's queue; `last_batch` is the size of the most recently received
/// batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Aggressive,
    PreemptiveHalf,
    PreemptiveThird,
    PreemptiveFourth,
    PreemptiveFifth,
    PreemptiveSixth,
    PreemptiveSeventh,
    PreemptiveEighth,
    Lazy,
}

impl Default for FetchMode {
    fn default() -> Self {
        Self::PreemptiveHalf
    }
}

impl FetchMode {
    fn should_continue(self, buffered: usize, last_batch: usize) -> bool {
        match self {
            Self::Aggressive => true,
            Self::Lazy => buffered == 0,
            Self::PreemptiveHalf => buffered <= last_batch / 2,
            Self::PreemptiveThird => buffered <= last_batch / 3,
            Self::PreemptiveFourth => buffered <= last_batch / 4,
            Self::PreemptiveFifth => buffered <= last_batch / 5,
            Self::PreemptiveSixth => buffered <= last_batch / 6,
            Self::PreemptiveSeventh => buffered <= last_batch / 7,
            Self::PreemptiveEighth => buffered <= last_batch / 8,
        }
    }
}

/// Global options attached to a `run` call: the third element of a `START`
/// payload. Distinct from a term's own options (`with_opts`), which travel
/// inside the query itself.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub(crate) db: Option<Db>,
    profile: bool,
    durability: Option<Durability>,
    time_format: Format,
    binary_format: Format,
    group_format: Format,
    pub(crate) fetch_mode: FetchMode,
    pub(crate) unwrap_lists: bool,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn db<T>(mut self, db: T) -> Self
    where
        T: StaticString,
    {
        self.db = Some(Db(db.static_string()));
        self
    }

    pub fn profile(mut self, profile: bool) -> Self {
        self.profile = profile;
        self
    }

    pub fn durability(mut self, durability: Durability) -> Self {
        self.durability = Some(durability);
        self
    }

    pub fn raw_time_format(mut self) -> Self {
        self.time_format = Format::Raw;
        self
    }

    pub fn raw_binary_format(mut self) -> Self {
        self.binary_format = Format::Raw;
        self
    }

    pub fn raw_group_format(mut self) -> Self {
        self.group_format = Format::Raw;
        self
    }

    pub fn fetch_mode(mut self, mode: FetchMode) -> Self {
        self.fetch_mode = mode;
        self
    }

    pub fn unwrap_lists(mut self, unwrap: bool) -> Self {
        self.unwrap_lists = unwrap;
        self
    }
}

// Accessors used by `crate::pseudo` to decide whether to decode a pseudo-type
// or leave it as-is.
impl Options {
    pub(crate) fn time_format_raw(&self) -> bool {
        self.time_format == Format::Raw
    }

    pub(crate) fn binary_format_raw(&self) -> bool {
        self.binary_format == Format::Raw
    }

    pub(crate) fn group_format_raw(&self) -> bool {
        self.group_format == Format::Raw
    }
}

impl Serialize for Options {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        if let Some(db) = &self.db {
            map.serialize_entry("db", db)?;
        }
        if self.profile {
            map.serialize_entry("profile", &true)?;
        }
        if let Some(durability) = &self.durability {
            map.serialize_entry("durability", durability)?;
        }
        if self.time_format == Format::Raw {
            map.serialize_entry("time_format", &self.time_format)?;
        }
        if self.binary_format == Format::Raw {
            map.serialize_entry("binary_format", &self.binary_format)?;
        }
        if self.group_format == Format::Raw {
            map.serialize_entry("group_format", &self.group_format)?;
        }
        map.end()
    }
}

/// The raw wire shape of a response frame.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Response {
    pub(crate) t: i32,
    #[serde(default)]
    pub(crate) e: Option<i32>,
    #[serde(default)]
    pub(crate) r: Value,
    #[serde(default)]
    pub(crate) b: Option<Value>,
    #[serde(default)]
    pub(crate) p: Option<Value>,
    #[serde(default)]
    pub(crate) n: Option<Vec<i32>>,
}

/// Converts whatever handle `run`/`exec` was called with (a `&Session`, a
/// connection pool wrapper, ...) into a fresh per-query `Connection` plus the
/// global options that connection's owner wants applied.
#[async_trait]
pub trait Arg {
    async fn into_run_opts(self, for_changes: bool) -> Result<(Connection, Options)>;
}

#[async_trait]
impl Arg for &Session {
    async fn into_run_opts(self, for_changes: bool) -> Result<(Connection, Options)> {
        let conn = self.connection()?;
        let mut opts = Options::new();
        opts.db = Some(Db(self.default_db().await));
        let _ = for_changes;
        Ok((conn, opts))
    }
}

#[async_trait]
impl Arg for &mut Session {
    async fn into_run_opts(self, for_changes: bool) -> Result<(Connection, Options)> {
        (&*self).into_run_opts(for_changes).await
    }
}

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

enum Pending {
    Start(BoxFuture<Result<(Connection, Options, ResponseType, Response)>>),
    Continue(BoxFuture<Result<(ResponseType, Response)>>),
    Idle,
}

/// A streaming, lazily-fetched result of a `run` call. Implements
/// [`futures::Stream`]; also exposes `first`/`single`/`close` and the
/// fetch-mode/profile/feed accessors spec'd for a query Result.
pub struct Cursor<T> {
    conn: Option<Connection>,
    opts: Options,
    pending: Pending,
    buffer: VecDeque<Value>,
    last_batch: usize,
    pending_error: Option<Error>,
    completed: bool,
    cancelled: bool,
    is_feed: bool,
    profile: Option<Value>,
    last_response_type: Option<ResponseType>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new<A>(query: Command, arg: A, for_changes: bool) -> Self
    where
        A: Arg + Send + 'static,
    {
        let start: BoxFuture<Result<(Connection, Options, ResponseType, Response)>> = Box::pin(async move {
            let (conn, opts) = arg.into_run_opts(for_changes).await?;
            let payload = Payload(QueryType::Start, Some(&query), opts.clone());
            let bytes = payload.to_bytes()?;
            let (typ, resp) = conn.request_bytes(&bytes, for_changes).await?;
            Ok((conn, opts, typ, resp))
        });

        Self {
            conn: None,
            opts: Options::default(),
            pending: Pending::Start(start),
            buffer: VecDeque::new(),
            last_batch: 0,
            pending_error: None,
            completed: false,
            cancelled: false,
            is_feed: false,
            profile: None,
            last_response_type: None,
            _marker: PhantomData,
        }
    }

    fn apply_response(&mut self, typ: ResponseType, resp: Response) {
        self.last_response_type = Some(typ);
        self.profile = resp.p.clone();
        if matches!(&resp.n, Some(notes) if !notes.is_empty()) {
            self.is_feed = true;
        }

        match typ {
            ResponseType::WaitComplete => {
                self.completed = true;
            }
            ResponseType::SuccessAtom => {
                let items = unwrap_atom(resp.r, self.opts.unwrap_lists);
                self.last_batch = items.len();
                self.buffer.extend(items);
                self.completed = true;
            }
            ResponseType::SuccessSequence => {
                let items = as_array(resp.r);
                self.last_batch = items.len();
                self.buffer.extend(items);
                self.completed = true;
            }
            ResponseType::SuccessPartial => {
                let items = as_array(resp.r);
                self.last_batch = items.len();
                self.buffer.extend(items);
            }
            _ => {
                let message = error_message(&resp.r);
                self.pending_error = Some(Error::from_error_response(
                    typ,
                    message,
                    resp.b.clone(),
                    resp.b,
                    resp.e,
                ));
                self.completed = true;
            }
        }

        self.maybe_prefetch();
    }

    fn maybe_prefetch(&mut self) {
        if self.completed || self.cancelled {
            return;
        }
        if !matches!(self.pending, Pending::Idle) {
            return;
        }
        if !self
            .opts
            .fetch_mode
            .should_continue(self.buffer.len(), self.last_batch)
        {
            return;
        }
        let Some(conn) = self.conn.clone() else { return };
        self.pending = Pending::Continue(Box::pin(async move { conn.send_continue().await }));
    }

    /// The server-reported profile of the query that produced the current
    /// response, if `profile(true)` was requested.
    pub fn profile(&self) -> Option<&Value> {
        self.profile.as_ref()
    }

    pub fn response_type(&self) -> Option<ResponseType> {
        self.last_response_type
    }

    /// Whether the first response carried a changefeed note. Feeds never
    /// reach `completed` on their own; callers must `close()` them.
    pub fn is_feed(&self) -> bool {
        self.is_feed
    }

    pub fn fetch_mode(mut self, mode: FetchMode) -> Self {
        self.opts.fetch_mode = mode;
        self
    }

    /// Cancel the query: marks the cursor cancelled and fires `STOP`
    /// best-effort if it is still partial. Further polls yield `None`.
    pub async fn close(&mut self) {
        if self.cancelled || self.completed {
            return;
        }
        self.cancelled = true;
        if let Some(conn) = &self.conn {
            let _ = conn.send_stop().await;
        }
    }
}

impl<T> Cursor<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Take the first item, then cancel the query.
    pub async fn first(mut self) -> Result<Option<T>> {
        use futures::StreamExt;
        let item = self.next().await.transpose();
        self.close().await;
        item
    }

    /// Require exactly one item.
    pub async fn single(mut self) -> Result<T> {
        use futures::StreamExt;
        let first = self.next().await;
        let rest_is_empty = self.next().await.is_none();
        self.close().await;
        match (first, rest_is_empty) {
            (Some(Ok(item)), true) => Ok(item),
            (Some(Err(err)), _) => Err(err),
            _ => Err(Error::Driver(Driver::Other(
                "expected exactly one result".into(),
            ))),
        }
    }
}

impl<T> Stream for Cursor<T>
where
    T: DeserializeOwned,
{
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        loop {
            if let Some(raw) = this.buffer.pop_front() {
                this.maybe_prefetch();
                let item = pseudo::decode(raw, &this.opts).and_then(|value| {
                    serde_json::from_value(value).map_err(Error::from)
                });
                return Poll::Ready(Some(item));
            }

            if this.cancelled {
                return Poll::Ready(None);
            }

            if let Some(err) = this.pending_error.take() {
                return Poll::Ready(Some(Err(err)));
            }

            if this.completed {
                return Poll::Ready(None);
            }

            match &mut this.pending {
                Pending::Idle => {
                    this.maybe_prefetch();
                    if matches!(this.pending, Pending::Idle) {
                        // A feed with nothing buffered and no continuation in
                        // flight is waiting on the server; nothing more to do
                        // until the next wake-up.
                        return Poll::Pending;
                    }
                }
                Pending::Start(fut) => match fut.as_mut().poll(cx) {
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(Err(err)) => {
                        this.pending = Pending::Idle;
                        this.completed = true;
                        return Poll::Ready(Some(Err(err)));
                    }
                    Poll::Ready(Ok((conn, opts, typ, resp))) => {
                        this.conn = Some(conn);
                        this.opts = opts;
                        this.pending = Pending::Idle;
                        this.apply_response(typ, resp);
                    }
                },
                Pending::Continue(fut) => match fut.as_mut().poll(cx) {
                    Poll::Pending => return Poll::Pending,
                    Poll::Ready(Err(err)) => {
                        this.pending = Pending::Idle;
                        this.completed = true;
                        return Poll::Ready(Some(Err(err)));
                    }
                    Poll::Ready(Ok((typ, resp))) => {
                        this.pending = Pending::Idle;
                        this.apply_response(typ, resp);
                    }
                },
            }
        }
    }
}

fn as_array(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        other => vec![other],
    }
}

fn unwrap_atom(value: Value, unwrap_lists: bool) -> Vec<Value> {
    let atom = match value {
        Value::Array(mut items) if items.len() == 1 => items.pop().unwrap(),
        other => other,
    };
    if unwrap_lists {
        if let Value::Array(items) = atom {
            return items;
        }
    }
    vec![atom]
}

#[cfg(test)]
mod tests {
    use super::FetchMode;

    #[test]
    fn aggressive_always_continues() {
        assert!(FetchMode::Aggressive.should_continue(1000, 1000));
        assert!(FetchMode::Aggressive.should_continue(0, 0));
    }

    #[test]
    fn lazy_only_continues_once_the_buffer_is_empty() {
        assert!(!FetchMode::Lazy.should_continue(1, 100));
        assert!(FetchMode::Lazy.should_continue(0, 100));
    }

    #[test]
    fn preemptive_half_continues_at_the_midpoint() {
        assert!(!FetchMode::PreemptiveHalf.should_continue(51, 100));
        assert!(FetchMode::PreemptiveHalf.should_continue(50, 100));
        assert!(FetchMode::PreemptiveHalf.should_continue(0, 100));
    }

    #[test]
    fn preemptive_eighth_continues_much_later() {
        assert!(!FetchMode::PreemptiveEighth.should_continue(20, 100));
        assert!(FetchMode::PreemptiveEighth.should_continue(12, 100));
    }
}

fn error_message(r: &Value) -> String {
    match r {
        Value::Array(items) => items
            .first()
            .and_then(Value::as_str)
            .unwrap_or("unknown error")
            .to_owned(),
        other => other.to_string(),
    }
}

impl Command {
    /// Run this query, returning a lazily-fetched stream of decoded items.
    ///
    /// ## Example
    ///
    /// ```
    /// # use futures::TryStreamExt;
    /// # rethinkdb_client::example(|r, conn| {
    /// let mut cur = r.table("users").run::<_, serde_json::Value>(conn);
    /// # cur
    /// # })
    /// ```
    pub fn run<A, T>(self, arg: A) -> Cursor<T>
    where
        A: Arg + Send + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        let for_changes = self.change_feed();
        Cursor::new(self, arg, for_changes)
    }

    /// Run this query and return exactly one decoded item.
    pub async fn exec<A, T>(self, arg: A) -> Result<T>
    where
        A: Arg + Send + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        self.run(arg).single().await
    }

    /// Run this query and collect every item into a `Vec`.
    pub async fn exec_to_vec<A, T>(self, arg: A) -> Result<Vec<T>>
    where
        A: Arg + Send + 'static,
        T: DeserializeOwned + Send + 'static,
    {
        use futures::TryStreamExt;
        self.run(arg).try_collect().await
    }
}
