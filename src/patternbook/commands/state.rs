use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Light {
    Red,
    Green,
    Yellow,
}

impl Light {
    pub fn next(self) -> Self {
        match self {
            Light::Red => Light::Green,
            Light::Green => Light::Yellow,
            Light::Yellow => Light::Red,
        }
    }

    pub fn may_cross(self) -> bool {
        matches!(self, Light::Green)
    }
}

/// Holds the current state; every change re-renders the whole view.
pub struct Crossing {
    light: Light,
    frames: Vec<String>,
}

impl Crossing {
    pub fn new(light: Light) -> Self {
        let mut crossing = Self {
            light,
            frames: Vec::new(),
        };
        crossing.render();
        crossing
    }

    pub fn advance(&mut self) {
        self.light = self.light.next();
        self.render();
    }

    pub fn light(&self) -> Light {
        self.light
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    fn render(&mut self) {
        let action = if self.light.may_cross() { "walk" } else { "wait" };
        self.frames.push(format!("{:?}: {}", self.light, action));
    }
}

pub fn run(_ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::State);
    let mut crossing = Crossing::new(Light::Red);
    for _ in 0..3 {
        crossing.advance();
    }

    for frame in crossing.frames() {
        result.add_message(CmdMessage::info(frame.clone()));
    }
    result.exhibit("light", &crossing.light())?;
    result.exhibit("frames", &crossing.frames())?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_returns_to_start() {
        let mut light = Light::Red;
        for _ in 0..3 {
            light = light.next();
        }
        assert_eq!(light, Light::Red);
    }

    #[test]
    fn every_transition_renders() {
        let mut crossing = Crossing::new(Light::Red);
        crossing.advance();
        crossing.advance();
        assert_eq!(crossing.frames(), ["Red: wait", "Green: walk", "Yellow: wait"]);
        assert_eq!(crossing.light(), Light::Yellow);
    }
}
