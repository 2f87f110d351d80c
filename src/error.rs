use std::{error::Error, fmt::Display};

#[derive(Debug)]
pub enum PortfolioError {
    EmptyName,
    BadEmail(Box<str>),
    ChecksFailed(usize),
}

impl Display for PortfolioError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Error: portfolio name is empty"),
            Self::BadEmail(email) => write!(f, "Error: invalid email address \"{}\"", email),
            Self::ChecksFailed(n) => write!(f, "Error: {} page check(s) failed", n),
        }
    }
}

impl Error for PortfolioError {}
