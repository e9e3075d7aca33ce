use std::backtrace::Backtrace;
use std::fmt::{self, Display, Formatter};
use std::panic::Location;

use crate::io::network::TransportError;

pub type AccResult<T> = Result<T, AccountErr>;

#[derive(Debug)]
pub struct AccountErr {
    pub kind: AccountErrKind,
    pub backtrace: Option<Backtrace>,
}

impl Display for AccountErr {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for AccountErr {}

/// The wording here is what a caller may surface to a user, so raw response
/// bodies never appear in it.
impl Display for AccountErrKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AccountErrKind::InvalidParams => write!(f, "Invalid parameters"),
            AccountErrKind::ServiceBusy => write!(f, "The service is busy, please try again"),
            AccountErrKind::Transport(TransportError::Endpoint(remote)) => match remote.kind() {
                Some(kind) => write!(f, "{kind}"),
                None => write!(f, "The account service rejected the request: {}", remote.msg),
            },
            AccountErrKind::Transport(TransportError::SendFailed(_)) => {
                write!(f, "Could not reach the account service")
            }
            AccountErrKind::Transport(err) => {
                write!(f, "unexpected transport error: {err:?}")
            }
            AccountErrKind::Unexpected(msg) => write!(f, "Unexpected error: {msg}"),
        }
    }
}

impl From<AccountErrKind> for AccountErr {
    fn from(kind: AccountErrKind) -> Self {
        Self { kind, backtrace: Some(Backtrace::force_capture()) }
    }
}

impl From<TransportError> for AccountErr {
    fn from(err: TransportError) -> Self {
        AccountErrKind::Transport(err).into()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountErrKind {
    /// A required argument was missing or out of range. Never reaches the network.
    InvalidParams,

    /// Whatever the transport reported, forwarded untouched.
    Transport(TransportError),

    /// The service answered with a body that did not match the expected shape.
    ServiceBusy,

    /// If no programmer in any part of the stack (including tests) expects
    /// to see a particular error, we debug format the underlying error to
    /// keep the number of error types in check.
    Unexpected(String),
}

impl AccountErr {
    pub fn is_invalid_params(&self) -> bool {
        self.kind == AccountErrKind::InvalidParams
    }

    /// The classified remote failure, if the service answered with a known code.
    pub fn remote_kind(&self) -> Option<RemoteErrorKind> {
        match &self.kind {
            AccountErrKind::Transport(TransportError::Endpoint(remote)) => remote.kind(),
            _ => None,
        }
    }
}

pub fn acc_err_unexpected<T: fmt::Debug>(err: T) -> AccountErrKind {
    AccountErrKind::Unexpected(format!("{:?}", err))
}

pub trait Unexpected<T> {
    fn map_unexpected(self) -> AccResult<T>;
}

impl<T, E: fmt::Debug> Unexpected<T> for Result<T, E> {
    #[track_caller]
    fn map_unexpected(self) -> AccResult<T> {
        let location = Location::caller();
        self.map_err(|err| {
            AccountErrKind::Unexpected(format!(
                "unexpected error at {}:{} {err:?}",
                location.file(),
                location.line(),
            ))
            .into()
        })
    }
}

/// A failure reported by the account service itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteError {
    pub code: i32,
    pub msg: String,
}

impl RemoteError {
    pub fn kind(&self) -> Option<RemoteErrorKind> {
        RemoteErrorKind::from_code(self.code)
    }
}

/// Error codes published by the account service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    InvalidParams,
    /// The underlying ledger write failed.
    LedgerWriteFailed,
    AccountExists,
    CreateFailed,
    AccountNotFound,
    UpdateStatusFailed,
    AvailableAddFailed,
    InsufficientAvailable,
    UnfreezeFailed,
    AvailableSubtractFailed,
    FreezeSubtractFailed,
    LogCreateFailed,
}

impl RemoteErrorKind {
    pub fn from_code(code: i32) -> Option<Self> {
        let kind = match code {
            1001 => Self::InvalidParams,
            1009 => Self::LedgerWriteFailed,
            2001 => Self::AccountExists,
            2002 => Self::CreateFailed,
            2003 => Self::AccountNotFound,
            2004 => Self::UpdateStatusFailed,
            2005 => Self::AvailableAddFailed,
            2007 => Self::InsufficientAvailable,
            2008 => Self::UnfreezeFailed,
            2009 => Self::AvailableSubtractFailed,
            2010 => Self::FreezeSubtractFailed,
            2011 => Self::LogCreateFailed,
            _ => return None,
        };
        Some(kind)
    }

    pub fn code(self) -> i32 {
        match self {
            Self::InvalidParams => 1001,
            Self::LedgerWriteFailed => 1009,
            Self::AccountExists => 2001,
            Self::CreateFailed => 2002,
            Self::AccountNotFound => 2003,
            Self::UpdateStatusFailed => 2004,
            Self::AvailableAddFailed => 2005,
            Self::InsufficientAvailable => 2007,
            Self::UnfreezeFailed => 2008,
            Self::AvailableSubtractFailed => 2009,
            Self::FreezeSubtractFailed => 2010,
            Self::LogCreateFailed => 2011,
        }
    }
}

impl Display for RemoteErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams => write!(f, "The account service rejected the parameters"),
            Self::LedgerWriteFailed => write!(f, "The ledger write failed"),
            Self::AccountExists => write!(f, "That account already exists"),
            Self::CreateFailed => write!(f, "The account could not be created"),
            Self::AccountNotFound => write!(f, "That account does not exist"),
            Self::UpdateStatusFailed => write!(f, "The account status could not be updated"),
            Self::AvailableAddFailed => write!(f, "Could not add to the available amount"),
            Self::InsufficientAvailable => write!(f, "Insufficient available balance"),
            Self::UnfreezeFailed => write!(f, "Could not unfreeze the amount"),
            Self::AvailableSubtractFailed => {
                write!(f, "Could not subtract from the available amount")
            }
            Self::FreezeSubtractFailed => write!(f, "Could not subtract from the frozen amount"),
            Self::LogCreateFailed => write!(f, "Could not record the account log"),
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn known_codes_classify() {
        for code in [1001, 1009, 2001, 2002, 2003, 2004, 2005, 2007, 2008, 2009, 2010, 2011] {
            let kind = RemoteErrorKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
    }

    #[test]
    fn unknown_codes_stay_unclassified() {
        assert_eq!(RemoteErrorKind::from_code(2006), None);
        assert_eq!(RemoteErrorKind::from_code(0), None);
    }

    #[test]
    fn remote_kind_reads_through_transport() {
        let err: AccountErr =
            TransportError::Endpoint(RemoteError { code: 2007, msg: "no funds".into() }).into();
        assert_eq!(err.remote_kind(), Some(RemoteErrorKind::InsufficientAvailable));
        assert_eq!(err.to_string(), "Insufficient available balance");
    }
}
