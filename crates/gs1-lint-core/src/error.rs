//! Error types for linting.

use thiserror::Error;

use crate::range::ErrorRange;

macro_rules! lint_error_kinds {
    ($(
        $(#[$meta:meta])*
        $variant:ident = $code:literal, $name:literal, $desc:literal;
    )+) => {
        /// Every violation a linter can report.
        ///
        /// Each kind carries a stable, non-zero numeric code and a stable
        /// snake-case name. A passing value has no kind at all: it is the
        /// `Ok(())` of a [`LintResult`](crate::LintResult).
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[repr(u16)]
        pub enum LintErrorKind {
            $(
                $(#[$meta])*
                $variant = $code,
            )+
        }

        impl LintErrorKind {
            /// All kinds in code order.
            pub const ALL: &'static [LintErrorKind] = &[$(LintErrorKind::$variant,)+];

            /// Stable numeric code (never zero).
            pub const fn code(self) -> u16 {
                self as u16
            }

            /// Stable snake-case identifier.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }

            /// Human-readable description of the violation.
            pub const fn description(self) -> &'static str {
                match self {
                    $(Self::$variant => $desc,)+
                }
            }

            /// Look up a kind by its snake-case identifier.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($name => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Look up a kind by its numeric code.
            pub fn from_code(code: u16) -> Option<Self> {
                Self::ALL.iter().copied().find(|k| k.code() == code)
            }
        }
    };
}

lint_error_kinds! {
    /// Not a valid ISO/IEC 5218 biological sex code.
    InvalidBiologicalSexCode = 1, "invalid_biological_sex_code",
        "A valid ISO/IEC 5218 biological sex code is required";
    /// Value is neither "0" nor "1".
    NotZeroOrOne = 2, "not_zero_or_one", "The value must be either \"0\" or \"1\"";
    /// Not a valid winding direction.
    InvalidWindingDirection = 3, "invalid_winding_direction",
        "A valid winding direction (\"0\", \"1\" or \"9\") is required";
    /// Importer index is not a single character.
    ImporterIdxMustBeOneCharacter = 4, "importer_idx_must_be_one_character",
        "The importer index must be a single character";
    /// Importer index character outside the permitted set.
    InvalidImporterIdxCharacter = 5, "invalid_importer_idx_character",
        "The importer index is not a permitted character";
    /// Value is not zero.
    NotZero = 6, "not_zero", "The value must be zero";
    /// Value is not a hyphen.
    NotHyphen = 7, "not_hyphen", "The value must be a hyphen";
    /// A non-digit where only digits are permitted.
    NonDigitCharacter = 8, "non_digit_character", "A non-digit character was found where a digit is expected";
    /// An all-zero value where zero is forbidden.
    IllegalZeroValue = 9, "illegal_zero_value", "A zero value is not permitted";
    /// Character outside GS1 AI encodable character set 82.
    InvalidCset82Character = 10, "invalid_cset82_character",
        "A non-CSET 82 character was found where a CSET 82 character is expected";
    /// Character outside the file-safe base64 alphabet.
    InvalidCset64Character = 11, "invalid_cset64_character",
        "A non-CSET 64 character was found where a CSET 64 character is expected";
    /// Malformed base64 padding.
    InvalidCset64Padding = 12, "invalid_cset64_padding", "Incorrect number of CSET 64 pad characters";
    /// Nothing to hold a check digit.
    TooShortForCheckDigit = 13, "too_short_for_check_digit",
        "The data is too short to contain a check digit";
    /// Check digit does not match the data.
    IncorrectCheckDigit = 14, "incorrect_check_digit", "The numeric check digit is incorrect";
    /// Only digits where at least one non-digit is required.
    RequiresNonDigitCharacter = 15, "requires_non_digit_character",
        "A non-digit character is required in this data";
    /// Fewer than two hour digits.
    HourTooShort = 16, "hour_too_short", "The hour is too short for HH format";
    /// More than two hour digits.
    HourTooLong = 17, "hour_too_long", "The hour is too long for HH format";
    /// Hour above 23.
    IllegalHour = 18, "illegal_hour", "The hour is not in the range 00 to 23";
    /// Fewer than two minute digits.
    MinuteTooShort = 19, "minute_too_short", "The minute is too short for MI format";
    /// More than two minute digits.
    MinuteTooLong = 20, "minute_too_long", "The minute is too long for MI format";
    /// Minute above 59.
    IllegalMinute = 21, "illegal_minute", "The minute is not in the range 00 to 59";
    /// Fewer than two second digits.
    SecondTooShort = 22, "second_too_short", "The second is too short for SS format";
    /// More than two second digits.
    SecondTooLong = 23, "second_too_long", "The second is too long for SS format";
    /// Second above 59.
    IllegalSecond = 24, "illegal_second", "The second is not in the range 00 to 59";
    /// Fewer than four hour and minute digits.
    HourWithMinuteTooShort = 25, "hour_with_minute_too_short",
        "The hour with minute is too short for HHMI format";
    /// More than four hour and minute digits.
    HourWithMinuteTooLong = 26, "hour_with_minute_too_long",
        "The hour with minute is too long for HHMI format";
    /// Date shorter than its format.
    DateTooShort = 27, "date_too_short", "The date is too short";
    /// Date longer than its format.
    DateTooLong = 28, "date_too_long", "The date is too long";
    /// Month outside 01 to 12.
    IllegalMonth = 29, "illegal_month", "The month is not in the range 01 to 12";
    /// Day not valid for the month.
    IllegalDay = 30, "illegal_day", "The day is not valid for the given month";
    /// Latitude is not ten digits.
    LatitudeInvalidLength = 31, "latitude_invalid_length", "The latitude must be ten digits";
    /// Latitude above 1800000000.
    InvalidLatitude = 32, "invalid_latitude", "The latitude is out of range";
    /// Longitude is not ten digits.
    LongitudeInvalidLength = 33, "longitude_invalid_length", "The longitude must be ten digits";
    /// Longitude above 3600000000.
    InvalidLongitude = 34, "invalid_longitude", "The longitude is out of range";
    /// Piece of total is empty or of odd length.
    InvalidLengthForPieceOfTotal = 35, "invalid_length_for_piece_of_total",
        "The piece of total must be a non-empty value of even length";
    /// Piece number is zero.
    ZeroPieceNumber = 36, "zero_piece_number", "The piece number must not be zero";
    /// Total number of pieces is zero.
    ZeroTotalPieces = 37, "zero_total_pieces", "The total number of pieces must not be zero";
    /// Piece number greater than the total.
    PieceNumberExceedsTotal = 38, "piece_number_exceeds_total",
        "The piece number must not exceed the total number of pieces";
    /// Not of the form `<pos>/<end>`.
    PositionInSequenceMalformed = 39, "position_in_sequence_malformed",
        "The position in sequence must be of the form <pos>/<end>";
    /// Number with a leading zero.
    IllegalZeroPrefix = 40, "illegal_zero_prefix", "The number must not begin with zero";
    /// Position greater than the end of the sequence.
    PositionExceedsEnd = 41, "position_exceeds_end",
        "The position must not exceed the end of the sequence";
    /// Not an ISO 3166-1 alpha-2 country code.
    NotIso3166Alpha2 = 42, "not_iso3166_alpha2", "A valid ISO 3166 two-character country code is required";
    /// IBAN too short.
    IbanTooShort = 43, "iban_too_short", "The IBAN is too short";
    /// IBAN too long.
    IbanTooLong = 44, "iban_too_long", "The IBAN is too long";
    /// IBAN country code unknown.
    IllegalIbanCountryCode = 45, "illegal_iban_country_code", "The IBAN must start with a valid ISO 3166 country code";
    /// IBAN character outside 0-9 A-Z.
    InvalidIbanCharacter = 46, "invalid_iban_character", "The IBAN contains an invalid character";
    /// IBAN check characters do not verify.
    IncorrectIbanChecksum = 47, "incorrect_iban_checksum", "The IBAN check characters are incorrect";
    /// Too short to hold a GS1 Company Prefix.
    TooShortForGcp = 48, "too_short_for_gcp", "The value is too short to contain a GS1 Company Prefix";
    /// Not a valid GS1 Company Prefix.
    InvalidGcpPrefix = 49, "invalid_gcp_prefix", "The GS1 Company Prefix is invalid";
    /// GS1 Company Prefix source unavailable.
    GcpDatasourceOffline = 50, "gcp_datasource_offline",
        "The GS1 Company Prefix could not be checked because the data source is offline";
    /// Coupon has no format code.
    CouponMissingFormatCode = 51, "coupon_missing_format_code", "The coupon's format code is missing";
    /// Coupon format code is neither 0 nor 1.
    CouponInvalidFormatCode = 52, "coupon_invalid_format_code", "The coupon's format code must be \"0\" or \"1\"";
    /// Coupon has no funder VLI.
    CouponMissingFunderVli = 53, "coupon_missing_funder_vli", "The coupon's funder VLI is missing";
    /// Coupon funder VLI above 6.
    CouponInvalidFunderLength = 54, "coupon_invalid_funder_length",
        "The coupon's funder VLI must be in the range 0 to 6";
    /// Coupon funder ID shorter than its VLI declares.
    CouponTruncatedFunder = 55, "coupon_truncated_funder", "The coupon's funder ID is truncated";
    /// Coupon offer code shorter than six digits.
    CouponTruncatedOfferCode = 56, "coupon_truncated_offer_code", "The coupon's offer code is truncated";
    /// Coupon has no serial number VLI.
    CouponMissingSerialNumberVli = 57, "coupon_missing_serial_number_vli",
        "The coupon's serial number VLI is missing";
    /// Coupon serial number shorter than its VLI declares.
    CouponTruncatedSerialNumber = 58, "coupon_truncated_serial_number",
        "The coupon's serial number is truncated";
    /// Data follows the coupon serial number.
    CouponExcessData = 59, "coupon_excess_data", "The coupon contains excess data after the serial number";
}

impl std::fmt::Display for LintErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LintErrorKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LintErrorKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown lint error kind: {name}")))
    }
}

/// A data violation: what is wrong and where.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{kind} (at {range})")]
pub struct LintError {
    /// The violated rule.
    pub kind: LintErrorKind,
    /// The offending bytes.
    pub range: ErrorRange,
}

impl LintError {
    /// Create a new lint error.
    pub const fn new(kind: LintErrorKind, range: ErrorRange) -> Self {
        Self { kind, range }
    }

    /// Start of the offending bytes.
    pub const fn offset(&self) -> usize {
        self.range.offset
    }

    /// Number of offending bytes.
    pub const fn len(&self) -> usize {
        self.range.len
    }

    /// Whether the range is empty (only for an empty candidate).
    pub const fn is_empty(&self) -> bool {
        self.range.len == 0
    }
}

/// Errors from looking up linters by name.
///
/// These are caller mistakes, not data violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// No linter is registered under this name.
    #[error("unknown linter: {name}")]
    UnknownLinter {
        /// The name that was requested.
        name: String,
        /// Registered names that look similar.
        suggestions: Vec<String>,
    },
}

impl RegistryError {
    /// Create an unknown-linter error without suggestions.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownLinter {
            name: name.into(),
            suggestions: Vec::new(),
        }
    }
}
