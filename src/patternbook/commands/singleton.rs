use crate::catalog::PatternId;
use crate::commands::{CmdMessage, CmdResult, Context};
use crate::error::Result;
use std::sync::Arc;

pub fn run(ctx: &Context<'_>) -> Result<CmdResult> {
    let mut result = CmdResult::for_pattern(PatternId::Singleton);

    let studio = ctx.registry.house(1);
    let mansion = ctx.registry.house(5);

    result.add_message(CmdMessage::info(format!(
        "studio: house {} with {} room(s)",
        studio.id, studio.rooms
    )));
    result.add_message(CmdMessage::info(format!(
        "mansion: house {} with {} room(s)",
        mansion.id, mansion.rooms
    )));
    if Arc::ptr_eq(&studio, &mansion) {
        result.add_message(CmdMessage::success(
            "studio and mansion are the same house; the request for 5 rooms was discarded",
        ));
    } else {
        result.add_message(CmdMessage::error("studio and mansion are different houses"));
    }

    result.exhibit("studio", &*studio)?;
    result.exhibit("mansion", &*mansion)?;
    Ok(result)
}
