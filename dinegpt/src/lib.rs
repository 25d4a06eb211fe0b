pub mod builders;
pub mod catalog;
pub mod conversation;
pub mod dispatch;
pub mod selection;

pub use builders::{
    build_chat_request, build_rating_request, build_restaurant_features, build_review_context,
    build_user_features, ReviewForm, ValidationError,
};
pub use conversation::ConversationState;
pub use selection::SelectionStore;
