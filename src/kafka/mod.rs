pub mod consumer;

pub use consumer::QueueConsumerService;
