/*
[INPUT]:  Method name strings from callers
[OUTPUT]: Public/private dispatch classification
[POS]:    HTTP layer - fixed method registries and classification
[UPDATE]: When Cryptsy adds or retires API methods
*/

/// Methods served by the public endpoint, no credentials required.
///
/// Membership is a compatibility contract with the server and must not
/// be extended speculatively.
pub const PUBLIC_METHODS: &[&str] = &[
    "marketdata",
    "marketdatav2",
    "singlemarketdata",
    "orderdata",
    "singleorderdata",
];

/// Methods served by the authenticated endpoint, HMAC-signed.
pub const PRIVATE_METHODS: &[&str] = &[
    "getinfo",
    "getmarkets",
    "mytransactions",
    "markettrades",
    "marketorders",
    "mytrades",
    "allmytrades",
    "myorders",
    "depth",
    "allmyorders",
    "createorder",
    "cancelorder",
    "cancelmarketorders",
    "cancelallorders",
    "calculatefees",
    "generatenewaddress",
];

/// Dispatch path for a known API method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Unauthenticated GET against the public endpoint
    Public,
    /// Signed POST against the authenticated endpoint
    Private,
}

/// Classify a method name against the fixed registries.
///
/// `None` means the method is unknown; callers reject it before any
/// network activity.
pub fn classify(method: &str) -> Option<MethodKind> {
    if PUBLIC_METHODS.contains(&method) {
        Some(MethodKind::Public)
    } else if PRIVATE_METHODS.contains(&method) {
        Some(MethodKind::Private)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_every_public_method_classifies_public() {
        for method in PUBLIC_METHODS {
            assert_eq!(classify(method), Some(MethodKind::Public), "{method}");
        }
    }

    #[test]
    fn test_every_private_method_classifies_private() {
        for method in PRIVATE_METHODS {
            assert_eq!(classify(method), Some(MethodKind::Private), "{method}");
        }
    }

    #[rstest]
    #[case("bogus")]
    #[case("")]
    #[case("GETINFO")]
    #[case("marketdata ")]
    #[case("createOrder")]
    fn test_unknown_methods_rejected(#[case] method: &str) {
        assert_eq!(classify(method), None);
    }

    #[test]
    fn test_registries_are_disjoint() {
        for method in PUBLIC_METHODS {
            assert!(!PRIVATE_METHODS.contains(method));
        }
    }
}
