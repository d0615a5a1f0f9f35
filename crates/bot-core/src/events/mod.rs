//! Domain events emitted after successful state changes

mod domain_event;

pub use domain_event::{
    BotDeployedEvent, BotEvent, DomainEvent, ScheduleEvent, UserRemovedEvent,
};
