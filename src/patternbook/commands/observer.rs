use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use std::cell::RefCell;
use std::rc::Rc;

pub type SubscriptionId = usize;

/// Holds a value and notifies subscribers each time it changes.
pub struct Subject<T> {
    value: T,
    next_id: SubscriptionId,
    listeners: Vec<(SubscriptionId, Box<dyn Fn(&T)>)>,
}

impl<T: PartialEq> Subject<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next_id: 0,
            listeners: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Sets the value. Listeners run only when it actually changed.
    pub fn set(&mut self, value: T) {
        if self.value == value {
            return;
        }
        self.value = value;
        for (_, listener) in &self.listeners {
            listener(&self.value);
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Observer);
    let log = Rc::new(RefCell::new(Vec::new()));

    let mut price = Subject::new(100u32);
    let sink = Rc::clone(&log);
    let ticker = price.subscribe(move |p| sink.borrow_mut().push(format!("ticker saw {}", p)));
    let sink = Rc::clone(&log);
    price.subscribe(move |p| sink.borrow_mut().push(format!("alert saw {}", p)));

    price.set(105);
    price.set(105);
    price.unsubscribe(ticker);
    price.set(99);

    let log = log.borrow();
    for line in log.iter() {
        result.add_message(CmdMessage::info(line.clone()));
    }
    result.exhibit("notifications", &*log)?;
    Ok(result)
}
