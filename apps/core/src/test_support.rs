//! In-memory transport for tests.

use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use futures::channel::oneshot;

use crate::client::{HttpTransport, RawResponse};
use crate::error::FetchError;

type Reply = Result<RawResponse, FetchError>;

enum Scripted {
    Ready(Reply),
    Held(oneshot::Receiver<Reply>),
}

/// Answers each URL from a queue of scripted replies. A reply can be held
/// back until the test releases it, to reproduce slow responses.
#[derive(Default)]
pub struct ScriptedTransport {
    routes: RefCell<HashMap<String, VecDeque<Scripted>>>,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn respond(&self, url: &str, status: u16, body: &str) {
        self.push(url, Scripted::Ready(Ok(RawResponse::new(status, body))));
    }

    pub fn fail(&self, url: &str, message: &str) {
        self.push(
            url,
            Scripted::Ready(Err(FetchError::Transport {
                message: message.to_string(),
            })),
        );
    }

    /// Queue a reply that stays pending until the returned sender fires.
    pub fn hold(&self, url: &str) -> oneshot::Sender<Reply> {
        let (sender, receiver) = oneshot::channel();
        self.push(url, Scripted::Held(receiver));
        sender
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    fn push(&self, url: &str, reply: Scripted) {
        self.routes
            .borrow_mut()
            .entry(url.to_string())
            .or_default()
            .push_back(reply);
    }
}

#[async_trait(?Send)]
impl HttpTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        let next = self
            .routes
            .borrow_mut()
            .get_mut(url)
            .and_then(VecDeque::pop_front);

        match next {
            Some(Scripted::Ready(reply)) => reply,
            Some(Scripted::Held(receiver)) => receiver.await.unwrap_or_else(|_| {
                Err(FetchError::Transport {
                    message: "held reply dropped".to_string(),
                })
            }),
            None => Err(FetchError::Transport {
                message: format!("no scripted reply for {url}"),
            }),
        }
    }
}

pub fn ok(body: &str) -> Reply {
    Ok(RawResponse::new(200, body))
}
