//! Client Platform Detection
//!
//! Maps the browser's user-agent string to the app download link for that
//! platform. An ordered rule table keeps the matching precedence explicit:
//! Android, then iOS, then Windows, then macOS, then the generic fallback.

/// Client descriptor probed from the browser environment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientHints {
    /// Raw `navigator.userAgent` value
    pub user_agent: String,

    /// Whether the runtime exposes the `MSStream` window global
    /// (legacy IE spoofing an iOS user agent)
    pub has_ms_stream: bool,
}

/// Download link bundle for one platform
#[derive(Debug, PartialEq, Eq)]
pub struct PlatformLink {
    pub href: &'static str,
    pub description: &'static str,
    pub icon_class: &'static str,
    pub button_label: &'static str,
}

pub static ANDROID: PlatformLink = PlatformLink {
    href: "https://play.google.com/store/apps/details?id=com.v2raytun.android",
    description: "For Android we recommend V2RayTun.",
    icon_class: "fab fa-android",
    button_label: "Get it on Google Play",
};

pub static IOS: PlatformLink = PlatformLink {
    href: "https://apps.apple.com/us/app/v2raytun/id6476628951",
    description: "For iOS we recommend V2RayTun.",
    icon_class: "fab fa-app-store-ios",
    button_label: "Download on the App Store",
};

pub static WINDOWS: PlatformLink = PlatformLink {
    href: "https://github.com/Happ-proxy/happ-desktop/releases/latest/download/setup-Happ.x64.exe",
    description: "For Windows we recommend Happ.",
    icon_class: "fab fa-windows",
    button_label: "Download for Windows",
};

pub static MACOS: PlatformLink = PlatformLink {
    href: "https://apps.apple.com/us/app/v2raytun/id6476628951",
    description: "For macOS we recommend V2RayTun.",
    icon_class: "fab fa-apple",
    button_label: "Download for macOS",
};

pub static FALLBACK: PlatformLink = PlatformLink {
    href: "https://play.google.com/store/apps/details?id=com.v2raytun.android",
    description: "Pick the app for your device.",
    icon_class: "fas fa-download",
    button_label: "Download the app",
};

struct DetectionRule {
    applies: fn(&ClientHints) -> bool,
    link: &'static PlatformLink,
}

// First match wins; iOS stays ahead of the case-insensitive "mac" rule
// because iPhone agents also carry "like Mac OS X".
static RULES: &[DetectionRule] = &[
    DetectionRule {
        applies: |hints| contains_ignore_case(&hints.user_agent, "android"),
        link: &ANDROID,
    },
    DetectionRule {
        applies: |hints| {
            ["iPad", "iPhone", "iPod"]
                .iter()
                .any(|marker| hints.user_agent.contains(marker))
                && !hints.has_ms_stream
        },
        link: &IOS,
    },
    DetectionRule {
        applies: |hints| contains_ignore_case(&hints.user_agent, "win"),
        link: &WINDOWS,
    },
    DetectionRule {
        applies: |hints| contains_ignore_case(&hints.user_agent, "mac"),
        link: &MACOS,
    },
];

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(needle)
}

/// Resolve the download link for a client.
///
/// Pure and total: anything the rules do not claim falls through to the
/// generic record.
pub fn resolve(hints: &ClientHints) -> &'static PlatformLink {
    RULES
        .iter()
        .find(|rule| (rule.applies)(hints))
        .map_or(&FALLBACK, |rule| rule.link)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hints(user_agent: &str) -> ClientHints {
        ClientHints {
            user_agent: user_agent.into(),
            has_ms_stream: false,
        }
    }

    #[test]
    fn test_detection_table() {
        let cases = [
            (
                "Mozilla/5.0 (Linux; Android 14; Pixel 8) AppleWebKit/537.36",
                &ANDROID,
            ),
            ("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)", &IOS),
            ("Mozilla/5.0 (iPad; CPU OS 16_6 like Mac OS X)", &IOS),
            ("Mozilla/5.0 (Windows NT 10.0; Win64; x64)", &WINDOWS),
            ("Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)", &MACOS),
            ("curl/8.4.0", &FALLBACK),
        ];
        for (user_agent, expected) in cases {
            assert_eq!(resolve(&hints(user_agent)), expected, "user agent: {user_agent}");
        }
    }

    #[test]
    fn test_ios_takes_precedence_over_mac() {
        // iPhone agents contain "like Mac OS X"; the iOS rule must claim
        // them before the macOS rule sees them.
        let link = resolve(&hints("Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"));
        assert_eq!(link, &IOS);
    }

    #[test]
    fn test_ms_stream_marker_excludes_ios() {
        let spoofed = ClientHints {
            user_agent: "Mozilla/5.0 (iPad; CPU OS 12_0 like Mac OS X)".into(),
            has_ms_stream: true,
        };
        // Falls through the iOS rule and lands on the case-insensitive
        // "mac" rule further down the table.
        assert_eq!(resolve(&spoofed), &MACOS);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let hints = hints("Mozilla/5.0 (Linux; Android 14)");
        assert!(std::ptr::eq(resolve(&hints), resolve(&hints)));
    }
}
