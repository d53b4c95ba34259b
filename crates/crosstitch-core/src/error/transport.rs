use super::Error;

/// Error from the remote transport.
///
/// A transport error is fatal for the request that triggered the remote
/// call: it propagates to the caller as the read's failure and is never
/// masked with partial data.
#[derive(Debug)]
pub(super) enum TransportError {
    /// Transport-level failure with no underlying error value.
    Message(Box<str>),

    /// Wraps the underlying error (reqwest, IO, ...).
    Source(Box<dyn std::error::Error + Send + Sync>),
}

impl TransportError {
    pub(super) fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Message(_) => None,
            Self::Source(err) => Some(err.as_ref()),
        }
    }
}

impl std::error::Error for TransportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        TransportError::source(self)
    }
}

impl core::fmt::Display for TransportError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str("transport error: ")?;
        match self {
            Self::Message(message) => f.write_str(message),
            Self::Source(err) => {
                // Display the error and walk its source chain
                core::fmt::Display::fmt(err, f)?;
                let mut source = err.source();
                while let Some(err) = source {
                    write!(f, ": {}", err)?;
                    source = err.source();
                }
                Ok(())
            }
        }
    }
}

impl Error {
    /// Creates an error from a transport error.
    ///
    /// This is the preferred way to convert transport-specific errors
    /// (reqwest errors, IO errors, ...) into crosstitch errors.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Error {
        Error::from(super::ErrorKind::Transport(TransportError::Source(
            Box::new(err),
        )))
    }

    /// Creates a transport error from a message, without an underlying error.
    pub fn transport_message(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Transport(TransportError::Message(
            message.into().into_boxed_str(),
        )))
    }

    /// Returns `true` if this error is a transport error.
    ///
    /// Lets callers recognize read failures caused by the remote system.
    pub fn is_transport(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Transport(_))
    }
}
