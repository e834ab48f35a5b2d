use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! level_enum {
    ($name:ident, default = $default:ident, { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// Indonesian label shown in level pickers.
            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLevel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($wire => Ok($name::$variant),)+
                    other => Err(UnknownLevel(other.to_string())),
                }
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown level '{0}'")]
pub struct UnknownLevel(pub String);

level_enum!(TargetLevel, default = Simple, {
    Simple => ("simple", "Sangat Sederhana"),
    Intermediate => ("intermediate", "Sedang"),
    Advanced => ("advanced", "Lanjutan"),
});

level_enum!(UserLevel, default = Beginner, {
    Beginner => ("beginner", "Pemula"),
    Intermediate => ("intermediate", "Menengah"),
    Advanced => ("advanced", "Lanjutan"),
});
