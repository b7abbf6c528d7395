//! The linter trait and the table of built-in linters.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{LintErrorKind, RegistryError};
use crate::linters;
use crate::result::LintResult;

/// Plain linter function.
pub type LintFn = fn(&[u8]) -> LintResult;

/// A named validation rule over a byte-string candidate.
pub trait Linter: Send + Sync {
    /// Stable identifier, e.g. `"iso5218"`.
    fn name(&self) -> &str;

    /// One-line description of what the linter accepts.
    fn description(&self) -> &str;

    /// Validate `data`.
    fn lint(&self, data: &[u8]) -> LintResult;
}

macro_rules! linter_table {
    ($(
        $variant:ident => $name:literal, $func:path, $desc:literal, [$($kind:ident),+ $(,)?];
    )+) => {
        /// Identifier of a built-in linter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
        pub enum LinterId {
            $(
                #[doc = $desc]
                $variant,
            )+
        }

        impl LinterId {
            const ALL: &'static [LinterId] = &[$(LinterId::$variant,)+];

            /// Every built-in linter, in table order.
            pub fn all() -> &'static [LinterId] {
                Self::ALL
            }

            /// Stable identifier.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// The linter function.
            pub fn lint_fn(self) -> LintFn {
                match self {
                    $(Self::$variant => $func,)+
                }
            }

            /// One-line description.
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)+
                }
            }

            /// The violations this linter can report.
            pub const fn kinds(self) -> &'static [LintErrorKind] {
                match self {
                    $(Self::$variant => &[$(LintErrorKind::$kind,)+],)+
                }
            }
        }

        impl FromStr for LinterId {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name => Ok(Self::$variant),)+
                    _ => Err(RegistryError::unknown(s)),
                }
            }
        }
    };
}

linter_table! {
    Iso5218 => "iso5218", linters::iso5218,
        "ISO/IEC 5218 biological sex code (0, 1, 2 or 9)",
        [InvalidBiologicalSexCode];
    YesNo => "yesno", linters::yesno,
        "Flag that is either 0 or 1",
        [NotZeroOrOne];
    Winding => "winding", linters::winding,
        "Winding direction (0, 1 or 9)",
        [InvalidWindingDirection];
    ImporterIdx => "importeridx", linters::importeridx,
        "Single importer index character from CSET 64",
        [ImporterIdxMustBeOneCharacter, InvalidImporterIdxCharacter];
    Zero => "zero", linters::zero,
        "One or more zeros",
        [NotZero];
    NonZero => "nonzero", linters::nonzero,
        "Digits that are not all zero",
        [NonDigitCharacter, IllegalZeroValue];
    Hyphen => "hyphen", linters::hyphen,
        "One or more hyphens",
        [NotHyphen];
    CsetNumeric => "csetnumeric", linters::csetnumeric,
        "Digits only",
        [NonDigitCharacter];
    Cset82 => "cset82", linters::cset82,
        "GS1 AI encodable character set 82",
        [InvalidCset82Character];
    Cset64 => "cset64", linters::cset64,
        "GS1 file-safe base64 (CSET 64) with optional padding",
        [InvalidCset64Character, InvalidCset64Padding];
    Csum => "csum", linters::csum,
        "Digits ending in a valid GS1 mod-10 check digit",
        [TooShortForCheckDigit, NonDigitCharacter, IncorrectCheckDigit];
    HasNonDigit => "hasnondigit", linters::hasnondigit,
        "Contains at least one non-digit",
        [RequiresNonDigitCharacter];
    Hh => "hh", linters::hh,
        "Hour, 00 to 23",
        [HourTooShort, HourTooLong, NonDigitCharacter, IllegalHour];
    Mi => "mi", linters::mi,
        "Minute, 00 to 59",
        [MinuteTooShort, MinuteTooLong, NonDigitCharacter, IllegalMinute];
    Ss => "ss", linters::ss,
        "Second, 00 to 59",
        [SecondTooShort, SecondTooLong, NonDigitCharacter, IllegalSecond];
    Hhmi => "hhmi", linters::hhmi,
        "Hour and minute, HHMI",
        [HourWithMinuteTooShort, HourWithMinuteTooLong, NonDigitCharacter, IllegalHour, IllegalMinute];
    Yymmd0 => "yymmd0", linters::yymmd0,
        "Date YYMMDD, day 00 permitted",
        [DateTooShort, DateTooLong, NonDigitCharacter, IllegalMonth, IllegalDay];
    Yymmdd => "yymmdd", linters::yymmdd,
        "Date YYMMDD",
        [DateTooShort, DateTooLong, NonDigitCharacter, IllegalMonth, IllegalDay];
    Yyyymmd0 => "yyyymmd0", linters::yyyymmd0,
        "Date YYYYMMDD, day 00 permitted",
        [DateTooShort, DateTooLong, NonDigitCharacter, IllegalMonth, IllegalDay];
    Yyyymmdd => "yyyymmdd", linters::yyyymmdd,
        "Date YYYYMMDD",
        [DateTooShort, DateTooLong, NonDigitCharacter, IllegalMonth, IllegalDay];
    Latitude => "latitude", linters::latitude,
        "Latitude as ten digits, offset by 90 degrees",
        [LatitudeInvalidLength, NonDigitCharacter, InvalidLatitude];
    Longitude => "longitude", linters::longitude,
        "Longitude as ten digits, offset by 180 degrees",
        [LongitudeInvalidLength, NonDigitCharacter, InvalidLongitude];
    PieceOfTotal => "pieceoftotal", linters::pieceoftotal,
        "Piece number and total count of equal width",
        [NonDigitCharacter, InvalidLengthForPieceOfTotal, ZeroPieceNumber, ZeroTotalPieces, PieceNumberExceedsTotal];
    PosInSeqSlash => "posinseqslash", linters::posinseqslash,
        "Position in sequence written as <pos>/<end>",
        [PositionInSequenceMalformed, IllegalZeroPrefix, PositionExceedsEnd];
    Iso3166Alpha2 => "iso3166alpha2", linters::iso3166alpha2,
        "ISO 3166-1 alpha-2 country code",
        [NotIso3166Alpha2];
    Iban => "iban", linters::iban,
        "International Bank Account Number",
        [IbanTooShort, IllegalIbanCountryCode, IbanTooLong, InvalidIbanCharacter, IncorrectIbanChecksum];
    GcpPos1 => "gcppos1", linters::gcppos1,
        "Starts with a GS1 Company Prefix",
        [TooShortForGcp, InvalidGcpPrefix];
    GcpPos2 => "gcppos2", linters::gcppos2,
        "GS1 Company Prefix from the second character",
        [TooShortForGcp, InvalidGcpPrefix];
    CouponPosOffer => "couponposoffer", linters::couponposoffer,
        "Positive offer file coupon code",
        [NonDigitCharacter, CouponMissingFormatCode, CouponInvalidFormatCode, CouponMissingFunderVli,
         CouponInvalidFunderLength, CouponTruncatedFunder, CouponTruncatedOfferCode,
         CouponMissingSerialNumberVli, CouponTruncatedSerialNumber, CouponExcessData];
}

impl fmt::Display for LinterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Linter for LinterId {
    fn name(&self) -> &str {
        LinterId::name(*self)
    }

    fn description(&self) -> &str {
        LinterId::description(*self)
    }

    fn lint(&self, data: &[u8]) -> LintResult {
        (self.lint_fn())(data)
    }
}

/// A linter built from a name, a description and a function or closure.
///
/// ```
/// use gs1_lint_core::{linters, FnLinter, LinterRegistry};
///
/// let mut registry = LinterRegistry::new();
/// registry.register(FnLinter::new("sex", "ISO/IEC 5218 alias", linters::iso5218));
/// assert!(registry.lint("sex", b"9").unwrap().is_ok());
/// ```
#[derive(Clone)]
pub struct FnLinter {
    name: String,
    description: String,
    func: Arc<dyn Fn(&[u8]) -> LintResult + Send + Sync>,
}

impl FnLinter {
    /// Create a linter from a function or closure.
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[u8]) -> LintResult + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for FnLinter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnLinter")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

impl Linter for FnLinter {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn lint(&self, data: &[u8]) -> LintResult {
        (self.func)(data)
    }
}
