use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;

/// Passive view. It only receives display strings; it never sees the model.
pub trait TemperatureView {
    fn show(&mut self, text: String);
}

#[derive(Debug, Default)]
pub struct RecordingView {
    pub shown: Vec<String>,
}

impl TemperatureView for RecordingView {
    fn show(&mut self, text: String) {
        self.shown.push(text);
    }
}

#[derive(Debug, Default)]
struct TemperatureModel {
    celsius: f64,
}

pub struct Presenter<V: TemperatureView> {
    model: TemperatureModel,
    view: V,
}

impl<V: TemperatureView> Presenter<V> {
    pub fn new(view: V) -> Self {
        Self {
            model: TemperatureModel::default(),
            view,
        }
    }

    /// Called by the view when the user enters a value.
    pub fn on_input(&mut self, celsius: f64) {
        self.model.celsius = celsius;
        let fahrenheit = celsius * 9.0 / 5.0 + 32.0;
        self.view
            .show(format!("{:.1}°C = {:.1}°F", self.model.celsius, fahrenheit));
    }

    pub fn into_view(self) -> V {
        self.view
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Mvp);
    let mut presenter = Presenter::new(RecordingView::default());

    presenter.on_input(21.5);
    presenter.on_input(-40.0);

    let view = presenter.into_view();
    for line in &view.shown {
        result.add_message(CmdMessage::info(line.clone()));
    }
    result.exhibit("shown", &view.shown)?;
    Ok(result)
}
