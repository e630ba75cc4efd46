// snaplink services
// Services cover the glue around the stores: parse-service client, share-link
// extraction, and history view formatting.

pub mod display;
pub mod parse_client;
pub mod share_link;
