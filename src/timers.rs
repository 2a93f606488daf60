use crate::error::PageError;
use crate::model::scheduler::{TaskId, TaskRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PendingRemoval {
    timeout: i32,
    node: web::Element,
}

/// Timed removal of ephemeral nodes, cancellable as a whole on teardown.
#[derive(Clone)]
pub struct Scheduler {
    window: web::Window,
    tasks: Rc<RefCell<TaskRegistry<PendingRemoval>>>,
}

impl Scheduler {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            tasks: Rc::new(RefCell::new(TaskRegistry::new())),
        }
    }

    /// Remove `node` from the document after `delay`.
    pub fn remove_after(&self, node: web::Element, delay: Duration) -> Result<TaskId, PageError> {
        let id = self.tasks.borrow_mut().allocate();
        let tasks = self.tasks.clone();
        // once_into_js frees the closure after it runs; if the timeout is
        // cleared instead, the page is going away anyway
        let callback = Closure::once_into_js(move || {
            let done = tasks.borrow_mut().complete(id);
            if let Some(task) = done {
                task.node.remove();
            }
        });
        let timeout = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                millis(delay),
            )?;
        self.tasks
            .borrow_mut()
            .insert(id, PendingRemoval { timeout, node });
        Ok(id)
    }

    /// Cancel every pending removal and drop their nodes. Returns how many
    /// were pending.
    pub fn cancel_all(&self) -> usize {
        let drained = self.tasks.borrow_mut().drain();
        for task in &drained {
            self.window.clear_timeout_with_handle(task.timeout);
            task.node.remove();
        }
        drained.len()
    }
}

/// A repeating browser timer. Dropping it clears the interval.
pub struct Interval {
    window: web::Window,
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn start(
        window: &web::Window,
        period: Duration,
        tick: impl FnMut() + 'static,
    ) -> Result<Self, PageError> {
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            millis(period),
        )?;
        Ok(Self {
            window: window.clone(),
            handle,
            _callback: callback,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        self.window.clear_interval_with_handle(self.handle);
    }
}

#[inline]
fn millis(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}
