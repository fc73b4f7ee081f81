//! Reads frames off the session's socket and demultiplexes them by token to
//! whichever `Connection` is waiting on that query.
//!
//! Owns the read half of the transport exclusively so a slow or idle server
//! never blocks a concurrent writer: reads and writes go through separate
//! halves of the split stream, only the write half is behind a lock.

use std::sync::Arc;

use futures::channel::oneshot;
use futures::future::{self, Either};
use futures::io::{AsyncReadExt, ReadHalf};

use crate::cmd::run::Response;
use crate::{err, net, Error, InnerSession};

pub(crate) fn spawn(
    inner: Arc<InnerSession>,
    read_half: ReadHalf<net::Stream>,
    shutdown_rx: oneshot::Receiver<()>,
) {
    std::thread::Builder::new()
        .name("rethinkdb-pump".into())
        .spawn(move || {
            futures::executor::block_on(run(inner, read_half, shutdown_rx));
        })
        .expect("failed to spawn response pump thread");
}

async fn run(
    inner: Arc<InnerSession>,
    mut read_half: ReadHalf<net::Stream>,
    mut shutdown_rx: oneshot::Receiver<()>,
) {
    loop {
        let read = Box::pin(read_frame(&mut read_half));
        match future::select(read, &mut shutdown_rx).await {
            Either::Left((Ok((token, bytes)), _)) => dispatch(&inner, token, bytes),
            Either::Left((Err(e), _)) => {
                drain(&inner, || Error::from(err::Driver::ConnectionBroken));
                tracing::debug!("response pump exiting: {}", e);
                return;
            }
            Either::Right(_) => {
                drain(&inner, || Error::from(err::Driver::ConnectionClosed));
                tracing::debug!("response pump exiting: session closed");
                return;
            }
        }
    }
}

fn drain(inner: &InnerSession, make_err: impl Fn() -> Error) {
    inner.mark_broken();
    for entry in inner.channels.iter() {
        let _ = entry.value().unbounded_send(Err(make_err()));
    }
    inner.channels.clear();
}

fn dispatch(inner: &InnerSession, token: u64, bytes: Vec<u8>) {
    let parsed = serde_json::from_slice::<Response>(&bytes)
        .map_err(|e| Error::from(err::Driver::Other(e.to_string())))
        .and_then(|resp| {
            let typ = ql2::response::ResponseType::from_i32(resp.t)
                .ok_or_else(|| Error::from(err::Driver::Other("unknown response type".into())))?;
            Ok((typ, resp))
        });

    let Some((_, tx)) = inner.channels.remove(&token) else {
        // No one is waiting (STOP already fired, or the Connection was
        // dropped); nothing to deliver.
        return;
    };
    // A SUCCESS_PARTIAL keeps the token alive for the next CONTINUE.
    if matches!(&parsed, Ok((t, _)) if *t == ql2::response::ResponseType::SuccessPartial) {
        inner.channels.insert(token, tx.clone());
    }
    let _ = tx.unbounded_send(parsed);
}

async fn read_frame(read_half: &mut ReadHalf<net::Stream>) -> crate::Result<(u64, Vec<u8>)> {
    let mut token_buf = [0u8; 8];
    read_half.read_exact(&mut token_buf).await.map_err(err::Driver::from)?;
    let token = u64::from_le_bytes(token_buf);

    let mut len_buf = [0u8; 4];
    read_half.read_exact(&mut len_buf).await.map_err(err::Driver::from)?;
    let len = u32::from_le_bytes(len_buf) as usize;

    let mut body = vec![0u8; len];
    read_half.read_exact(&mut body).await.map_err(err::Driver::from)?;
    Ok((token, body))
}
