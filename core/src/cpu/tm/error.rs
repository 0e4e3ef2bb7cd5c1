use super::Tm;

/// CPU error taxonomy. Latching any non-`Ok` code also sets the stop
/// flag; the pair is what [`Tm::has_error`](super::Tm::has_error) reports.
///
/// `Unknown` holds codes outside the architectural set, which a program
/// can install with the SEC instruction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ErrorCode {
    #[default]
    Ok,
    Hardware,
    BusRead,
    BusWrite,
    InvalidOpcode,
    ReadAccessViolation,
    WriteAccessViolation,
    ExecuteAccessViolation,
    DataStackOverflow,
    DataStackUnderflow,
    CallStackOverflow,
    CallStackUnderflow,
    Unknown(u8),
}

impl ErrorCode {
    /// The architectural 8-bit value of this code.
    pub fn code(self) -> u8 {
        match self {
            ErrorCode::Ok => 0x00,
            ErrorCode::Hardware => 0x01,
            ErrorCode::BusRead => 0x02,
            ErrorCode::BusWrite => 0x03,
            ErrorCode::InvalidOpcode => 0x04,
            ErrorCode::ReadAccessViolation => 0x05,
            ErrorCode::WriteAccessViolation => 0x06,
            ErrorCode::ExecuteAccessViolation => 0x07,
            ErrorCode::DataStackOverflow => 0x08,
            ErrorCode::DataStackUnderflow => 0x09,
            ErrorCode::CallStackOverflow => 0x0A,
            ErrorCode::CallStackUnderflow => 0x0B,
            ErrorCode::Unknown(value) => value,
        }
    }

    /// Decode an 8-bit error value, e.g. one installed by SEC.
    pub fn from_code(value: u8) -> ErrorCode {
        match value {
            0x00 => ErrorCode::Ok,
            0x01 => ErrorCode::Hardware,
            0x02 => ErrorCode::BusRead,
            0x03 => ErrorCode::BusWrite,
            0x04 => ErrorCode::InvalidOpcode,
            0x05 => ErrorCode::ReadAccessViolation,
            0x06 => ErrorCode::WriteAccessViolation,
            0x07 => ErrorCode::ExecuteAccessViolation,
            0x08 => ErrorCode::DataStackOverflow,
            0x09 => ErrorCode::DataStackUnderflow,
            0x0A => ErrorCode::CallStackOverflow,
            0x0B => ErrorCode::CallStackUnderflow,
            value => ErrorCode::Unknown(value),
        }
    }
}

impl Tm {
    /// Format the diagnostic for the currently latched error code. The
    /// message is regenerated on demand from the fault registers, so it
    /// always reflects the most recent failure.
    pub fn error_message(&self) -> String {
        match self.ec {
            ErrorCode::Ok => "no error".to_string(),
            ErrorCode::Hardware => {
                format!(
                    "hardware fault while executing instruction at ${:08X}",
                    self.ia
                )
            }
            ErrorCode::BusRead => format!("bus read failed at address ${:08X}", self.ea),
            ErrorCode::BusWrite => format!("bus write failed at address ${:08X}", self.ea),
            ErrorCode::InvalidOpcode => {
                format!(
                    "invalid opcode ${:02X} at address ${:08X}",
                    self.inst, self.ia
                )
            }
            ErrorCode::ReadAccessViolation => {
                format!("read access violation at address ${:08X}", self.ea)
            }
            ErrorCode::WriteAccessViolation => {
                format!("write access violation at address ${:08X}", self.ea)
            }
            ErrorCode::ExecuteAccessViolation => {
                format!("execute access violation at address ${:08X}", self.ea)
            }
            ErrorCode::DataStackOverflow => {
                format!("data stack overflow at address ${:08X}", self.ia)
            }
            ErrorCode::DataStackUnderflow => {
                format!("data stack underflow at address ${:08X}", self.ia)
            }
            ErrorCode::CallStackOverflow => {
                format!("call stack overflow at address ${:08X}", self.ia)
            }
            ErrorCode::CallStackUnderflow => {
                format!("call stack underflow at address ${:08X}", self.ia)
            }
            ErrorCode::Unknown(value) => format!("unknown error code ${:02X}", value),
        }
    }
}
