// Each lesson is standalone; nothing in here is shared between them.

pub mod async_await;
pub mod callbacks;
pub mod destructuring;
pub mod patterns;
pub mod solid;

pub use async_await::AsyncAwaitLesson;
pub use callbacks::CallbacksLesson;
pub use destructuring::DestructuringLesson;
pub use patterns::PatternsLesson;
