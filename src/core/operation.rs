use crate::core::error::DispatchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Residue,
    Potency,
}

impl Operation {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operation::Add),
            "-" => Some(Operation::Subtract),
            "*" => Some(Operation::Multiply),
            "/" => Some(Operation::Divide),
            "residue" => Some(Operation::Residue),
            "potency" => Some(Operation::Potency),
            _ => None,
        }
    }

    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, DispatchError> {
        match self {
            Operation::Add => Ok(lhs + rhs),
            Operation::Subtract => Ok(lhs - rhs),
            Operation::Multiply => Ok(lhs * rhs),
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(DispatchError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
            // Operands truncate toward zero first; the remainder takes the sign
            // of the dividend. `i64::MIN % -1` wraps to its true value of 0.
            Operation::Residue => {
                let divisor = rhs.trunc() as i64;
                if divisor == 0 {
                    return Err(DispatchError::DivisionByZero);
                }
                Ok((lhs.trunc() as i64).wrapping_rem(divisor) as f64)
            }
            Operation::Potency => Ok(lhs.powf(rhs)),
        }
    }
}

/// Symbols are only checked here, never at load time.
pub fn dispatch(symbol: &str, lhs: f64, rhs: f64) -> Result<f64, DispatchError> {
    let operation =
        Operation::from_symbol(symbol).ok_or_else(|| DispatchError::UnknownOperation {
            symbol: symbol.to_string(),
        })?;
    operation.apply(lhs, rhs)
}
