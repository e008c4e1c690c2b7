//! Test helpers: a recording in-memory `ExpenseApi`, sample data, and a
//! browser render helper for component tests.

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use async_trait::async_trait;
use shared::{CategoryTotal, Expense, ExpensePayload, Summary};

use super::api::{ExpenseApi, RequestError};

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(ExpensePayload),
    Update(String, ExpensePayload),
    Delete(String),
    FetchSummary,
}

/// Resolves once the flag is set, re-polling itself until then.
struct GateOpen(Rc<Cell<bool>>);

impl Future for GateOpen {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0.get() {
            Poll::Ready(())
        } else {
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

/// One response kept back until a later call of the same kind has answered.
struct Held<T> {
    result: RefCell<Option<T>>,
    released: Rc<Cell<bool>>,
}

impl<T> Default for Held<T> {
    fn default() -> Self {
        Self {
            result: RefCell::new(None),
            released: Rc::new(Cell::new(false)),
        }
    }
}

impl<T> Held<T> {
    fn arm(&self, result: T) {
        *self.result.borrow_mut() = Some(result);
        self.released.set(false);
    }

    /// Answers with the held result after release, or with `fallback`
    /// straight away, releasing any held call.
    async fn answer(&self, fallback: T) -> T {
        let held = self.result.borrow_mut().take();
        match held {
            Some(result) => {
                GateOpen(Rc::clone(&self.released)).await;
                result
            }
            None => {
                self.released.set(true);
                fallback
            }
        }
    }
}

/// Returns canned results and records every call it receives.
///
/// Create and update echo the payload back with an id unless a result was set.
pub struct RecordingApi {
    calls: RefCell<Vec<ApiCall>>,
    list: RefCell<Result<Vec<Expense>, RequestError>>,
    summary: RefCell<Result<Summary, RequestError>>,
    save: RefCell<Option<Result<Expense, RequestError>>>,
    delete: RefCell<Result<(), RequestError>>,
    held_list: Held<Result<Vec<Expense>, RequestError>>,
    held_summary: Held<Result<Summary, RequestError>>,
}

impl RecordingApi {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            list: RefCell::new(Ok(Vec::new())),
            summary: RefCell::new(Ok(Summary::default())),
            save: RefCell::new(None),
            delete: RefCell::new(Ok(())),
            held_list: Held::default(),
            held_summary: Held::default(),
        }
    }

    pub fn set_list(&self, result: Result<Vec<Expense>, RequestError>) {
        *self.list.borrow_mut() = result;
    }

    pub fn set_summary(&self, result: Result<Summary, RequestError>) {
        *self.summary.borrow_mut() = result;
    }

    pub fn set_save(&self, result: Result<Expense, RequestError>) {
        *self.save.borrow_mut() = Some(result);
    }

    pub fn set_delete(&self, result: Result<(), RequestError>) {
        *self.delete.borrow_mut() = result;
    }

    /// The next list call answers with `result`, but only after a later list
    /// call has returned.
    pub fn hold_next_list(&self, result: Result<Vec<Expense>, RequestError>) {
        self.held_list.arm(result);
    }

    /// The next summary call answers with `result`, but only after a later
    /// summary call has returned.
    pub fn hold_next_summary(&self, result: Result<Summary, RequestError>) {
        self.held_summary.arm(result);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, predicate: impl Fn(&ApiCall) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| predicate(call)).count()
    }

    fn record(&self, call: ApiCall) {
        self.calls.borrow_mut().push(call);
    }

    fn saved(&self, id: &str, payload: &ExpensePayload) -> Result<Expense, RequestError> {
        match self.save.borrow().clone() {
            Some(result) => result,
            None => Ok(Expense {
                id: Some(id.to_string()),
                title: payload.title.clone(),
                amount: payload.amount,
                category: payload.category.clone(),
                date: payload.date.clone(),
            }),
        }
    }
}

#[async_trait(?Send)]
impl ExpenseApi for RecordingApi {
    async fn list(&self) -> Result<Vec<Expense>, RequestError> {
        self.record(ApiCall::List);
        let fallback = self.list.borrow().clone();
        self.held_list.answer(fallback).await
    }

    async fn create(&self, payload: &ExpensePayload) -> Result<Expense, RequestError> {
        self.record(ApiCall::Create(payload.clone()));
        self.saved("created", payload)
    }

    async fn update(&self, id: &str, payload: &ExpensePayload) -> Result<Expense, RequestError> {
        self.record(ApiCall::Update(id.to_string(), payload.clone()));
        self.saved(id, payload)
    }

    async fn delete(&self, id: &str) -> Result<(), RequestError> {
        self.record(ApiCall::Delete(id.to_string()));
        self.delete.borrow().clone()
    }

    async fn fetch_summary(&self) -> Result<Summary, RequestError> {
        self.record(ApiCall::FetchSummary);
        let fallback = self.summary.borrow().clone();
        self.held_summary.answer(fallback).await
    }
}

pub fn sample_expense(id: &str, title: &str, category: &str, amount: f64) -> Expense {
    Expense {
        id: Some(id.to_string()),
        title: title.to_string(),
        amount,
        category: category.to_string(),
        date: "2024-03-15T00:00:00.000Z".to_string(),
    }
}

pub fn sample_summary() -> Summary {
    Summary {
        total: 200.0,
        count: 4,
        by_category: vec![
            CategoryTotal {
                category: "Food".to_string(),
                total: 120.0,
                count: 3,
            },
            CategoryTotal {
                category: "Travel".to_string(),
                total: 80.0,
                count: 1,
            },
        ],
    }
}

/// Mounts `C` under a fresh element, lets Yew render, and returns the text
/// content of what it drew.
#[cfg(target_arch = "wasm32")]
pub async fn rendered_text<C>(props: C::Properties) -> String
where
    C: yew::BaseComponent,
{
    let document = web_sys::window().unwrap().document().unwrap();
    let root = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&root).unwrap();

    let handle = yew::Renderer::<C>::with_root_and_props(root.clone(), props).render();
    yew::platform::time::sleep(std::time::Duration::from_millis(10)).await;

    let text = root.text_content().unwrap_or_default();
    handle.destroy();
    root.remove();
    text
}
