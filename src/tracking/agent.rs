/// Device, browser, and platform classified from a raw user-agent string
/// by substring matching. Feeds the analytics table only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentInfo {
    pub device: String,
    pub browser: String,
    pub platform: String,
}

pub fn parse(user_agent: Option<&str>) -> AgentInfo {
    let Some(ua) = user_agent else {
        return AgentInfo {
            device: "unknown".to_string(),
            browser: "unknown".to_string(),
            platform: "unknown".to_string(),
        };
    };
    let lower = ua.to_lowercase();

    let device = if lower.contains("bot") || lower.contains("crawler") || lower.contains("spider") {
        "bot"
    } else if lower.contains("ipad") || lower.contains("tablet") {
        "tablet"
    } else if lower.contains("mobile") || lower.contains("android") || lower.contains("iphone") {
        "mobile"
    } else {
        "desktop"
    };

    // Order matters: Chrome UAs contain "safari", Edge UAs contain "chrome".
    let browser = if lower.contains("edg/") || lower.contains("edge") {
        "Edge"
    } else if lower.contains("opr/") || lower.contains("opera") {
        "Opera"
    } else if lower.contains("chrome") {
        "Chrome"
    } else if lower.contains("firefox") {
        "Firefox"
    } else if lower.contains("safari") {
        "Safari"
    } else {
        "unknown"
    };

    let platform = if lower.contains("android") {
        "Android"
    } else if lower.contains("iphone") || lower.contains("ipad") || lower.contains("ios") {
        "iOS"
    } else if lower.contains("windows") {
        "Windows"
    } else if lower.contains("mac os") || lower.contains("macintosh") {
        "macOS"
    } else if lower.contains("linux") {
        "Linux"
    } else {
        "unknown"
    };

    AgentInfo {
        device: device.to_string(),
        browser: browser.to_string(),
        platform: platform.to_string(),
    }
}
