mod message;

pub(crate) use message::MessageHandler;
pub(crate) use sign_test::SignTestHandler;
