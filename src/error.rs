use std::{io, net::SocketAddr};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't load site configuration: {0}")]
    Config(String),
    #[error("Couldn't bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("Server stopped unexpectedly")]
    Serve(#[source] io::Error),
}
