/// Story fetch worker (cancel-and-restart per screen).
pub mod fetch;
