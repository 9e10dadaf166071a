mod tick_scheduler;

pub use tick_scheduler::TickScheduler;
