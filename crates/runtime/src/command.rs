//! Host-facing command surface.
//!
//! The host's event interpreter delivers a command name plus positional
//! string arguments. Numeric auxiliary input (class id, status id, target
//! id) arrives through a separately configured value channel and is passed
//! in as `aux` by the adapter.

/// Parsed arguments of the distribute command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributeRequest {
    /// Signed source pool, resolved by the host adapter.
    pub amount: i64,
    /// Single-letter target token (`A`/`B`/`C`/`L`/`P`/`S`/`V`).
    pub token: String,
    /// Whether group policies divide the pool per member.
    pub split_evenly: bool,
    /// Auxiliary value bound into class/status/single-target policies.
    pub aux: i64,
}

/// Commands understood by the growth runtime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrowthCommand {
    /// Present the growth menu (lazily initializing the ledger).
    OpenMenu,
    /// Zero every roster balance.
    InitializePoints,
    /// Distribute a point pool across a target group.
    Distribute(DistributeRequest),
}

impl GrowthCommand {
    /// Parses a raw host command.
    ///
    /// Returns `None` for command names owned by other systems, so the
    /// adapter can chain dispatchers the way the host chains interpreter
    /// handlers.
    pub fn parse(command: &str, args: &[&str], aux: i64) -> Option<Self> {
        match command {
            "GrowthOpen" => Some(Self::OpenMenu),
            "GrowthInit" => Some(Self::InitializePoints),
            "GrowthDistribute" => {
                let amount = args.first().and_then(|arg| arg.parse().ok()).unwrap_or(0);
                let token = args.get(1).copied().unwrap_or("").to_string();
                let split_evenly = args
                    .get(2)
                    .is_some_and(|arg| arg.eq_ignore_ascii_case("true"));
                Some(Self::Distribute(DistributeRequest {
                    amount,
                    token,
                    split_evenly,
                    aux,
                }))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_commands() {
        assert_eq!(
            GrowthCommand::parse("GrowthOpen", &[], 0),
            Some(GrowthCommand::OpenMenu)
        );
        assert_eq!(
            GrowthCommand::parse("GrowthInit", &[], 0),
            Some(GrowthCommand::InitializePoints)
        );
        assert_eq!(
            GrowthCommand::parse("GrowthDistribute", &["100", "B", "true"], 3),
            Some(GrowthCommand::Distribute(DistributeRequest {
                amount: 100,
                token: "B".to_string(),
                split_evenly: true,
                aux: 3,
            }))
        );
    }

    #[test]
    fn foreign_commands_pass_through() {
        assert_eq!(GrowthCommand::parse("ShowPicture", &["1"], 0), None);
    }

    #[test]
    fn malformed_distribute_arguments_degrade_gracefully() {
        let parsed = GrowthCommand::parse("GrowthDistribute", &["abc"], 0).unwrap();
        assert_eq!(
            parsed,
            GrowthCommand::Distribute(DistributeRequest {
                amount: 0,
                token: String::new(),
                split_evenly: false,
                aux: 0,
            })
        );
    }

    #[test]
    fn split_flag_only_accepts_true() {
        let GrowthCommand::Distribute(request) =
            GrowthCommand::parse("GrowthDistribute", &["10", "P", "yes"], 0).unwrap()
        else {
            panic!("expected a distribute command");
        };
        assert!(!request.split_evenly);
    }
}
