mod transforms;

use transforms::{
    FactorHandler, FrameHandler, HandlerBuilder, LogicalHandler,
    NumberHandler, TextHandler,
};

use crate::dispatch::Registry;

/// Register the five built-in category handlers.
pub(crate) fn register_defaults(registry: &mut Registry) {
    TextHandler::register(registry);
    NumberHandler::register(registry);
    LogicalHandler::register(registry);
    FactorHandler::register(registry);
    FrameHandler::register(registry);
}
