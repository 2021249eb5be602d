use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use serde::Serialize;

/// Model: data description only.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CounterModel {
    pub label: String,
    pub count: u32,
}

/// View: turns a model into something visual.
pub fn render(model: &CounterModel) -> String {
    format!("[{}: {}]", model.label, model.count)
}

/// Controller: the only code that changes the model.
pub struct CounterController {
    model: CounterModel,
}

impl CounterController {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            model: CounterModel {
                label: label.into(),
                count: 0,
            },
        }
    }

    pub fn increment(&mut self) {
        self.model.count += 1;
    }

    pub fn reset(&mut self) {
        self.model.count = 0;
    }

    pub fn model(&self) -> &CounterModel {
        &self.model
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Mvc);
    let mut controller = CounterController::new("clicks");

    result.add_message(CmdMessage::info(render(controller.model())));
    controller.increment();
    controller.increment();
    result.add_message(CmdMessage::info(render(controller.model())));

    result.exhibit("model", controller.model())?;
    Ok(result)
}
