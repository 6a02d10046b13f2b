pub mod bot;
pub mod faq;
pub mod intent;
pub mod normalize;
pub mod order;
pub mod session;
pub mod similarity;
