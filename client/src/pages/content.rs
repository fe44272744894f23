//! Static marketing copy shared by the pages.
//!
//! DESIGN
//! ======
//! Copy lives in plain data tables so pages stay layout-only and the fee and
//! plan numbers quoted in several places come from one spot.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Icon, heading, and one line of copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Card {
    pub icon: &'static str,
    pub title: &'static str,
    pub text: &'static str,
}

/// A pricing tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub blurb: &'static str,
    pub price: &'static str,
    /// Rendered directly after the price, including any leading space.
    pub price_unit: &'static str,
    /// Extra line under the price, if any.
    pub fee_note: Option<&'static str>,
    pub perks: [&'static str; 3],
    pub cta: &'static str,
    /// Highlighted as the recommended tier.
    pub featured: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const GUEST_FEE: &str = "12%";
pub const OWNER_FEE: &str = "5% owner fee (min $2)";

pub const TAGLINE: &str = "Hunt & Fish Everywhere.";
pub const PITCH: &str = "A clean, trusted marketplace connecting landowners and outdoorspeople for day-access. \
                         Simple rules. Clear boundaries. Instant bookings.";
pub const HERO_MAP_CAPTION: &str = "Demo map. Add a listing below to see your marker instantly.";

/// Rule highlights shown as pills under the hero.
pub const RULE_PILLS: [(&str, &str); 3] = [("📍", "Zones & Hours"), ("🚫", "No-Transfer"), ("🕒", "Check-In / Out")];

pub const FEATURES: [Card; 6] = [
    Card { icon: "🛡", title: "Verified access", text: "ID, license & (where required) insurance verifications." },
    Card { icon: "🗺", title: "Clear boundaries", text: "Map zones, hours, and no-go areas." },
    Card { icon: "📅", title: "Instant bookings", text: "Instant or request-to-book, your choice." },
    Card { icon: "$", title: "Simple fees", text: "12% guest + 5% owner (min $2)." },
    Card { icon: "👥", title: "Two-way reviews", text: "Ratings for hunters and owners build trust." },
    Card { icon: "✔", title: "Rule-first design", text: "Zones & Hours, No-Transfer, check-in/out photos." },
];

pub const PLANS: [Plan; 3] = [
    Plan {
        name: "Day-Pass",
        blurb: "Great for occasional trips.",
        price: GUEST_FEE,
        price_unit: " guest fee",
        fee_note: Some(OWNER_FEE),
        perks: ["No monthly commitment", "Two-way reviews", "Basic support"],
        cta: "Book a Day",
        featured: false,
    },
    Plan {
        name: "Priority Access",
        blurb: "For frequent hunters & anglers.",
        price: "$12.99",
        price_unit: "/mo",
        fee_note: None,
        perks: ["Early booking windows", "50% off guest fees", "Priority support"],
        cta: "Join Membership",
        featured: true,
    },
    Plan {
        name: "Preferred Landowner",
        blurb: "Boost your property income.",
        price: "$9.99",
        price_unit: "/mo",
        fee_note: None,
        perks: ["50% off owner fees", "Featured placement", "Dedicated payouts line"],
        cta: "Upgrade Owner",
        featured: false,
    },
];

pub const FAQ: [Faq; 5] = [
    Faq {
        question: "Do I need a hunting/fishing license?",
        answer: "Yes, local regulations apply. We verify that hunters have valid ID, license, and (where applicable) \
                 insurance before booking.",
    },
    Faq {
        question: "How do payouts work for owners?",
        answer: "Funds are released 24 hours after the booked day ends (minus OpenAcre fees). You can choose direct \
                 deposit or Interac e-Transfer.",
    },
    Faq {
        question: "What if a guest breaks the rules?",
        answer: "Properties have clear rules: Zones & Hours, No-Transfer, Check-in/Check-out. Violations may trigger \
                 warnings, fees, or account removal.",
    },
    Faq {
        question: "What are the fees?",
        answer: "Day-pass bookings include a 12% platform fee from the guest and a 5% owner fee (min $2). Memberships \
                 can reduce fees.",
    },
    Faq {
        question: "Is there insurance?",
        answer: "OpenAcre requires proof of personal liability coverage where required by law. Owners should maintain \
                 property liability coverage as recommended by their insurer.",
    },
];

pub const OWNER_BENEFITS: [Card; 3] = [
    Card { icon: "🛡", title: "You set the rules", text: "Zones & Hours, No-Transfer, enforced with check-in/out photos." },
    Card {
        icon: "$",
        title: "Predictable payouts",
        text: "Payouts 24 hours after the booked day completes (minus fees).",
    },
    Card { icon: "👥", title: "Vetted guests", text: "ID, license, and (if required) insurance." },
];

pub const OWNER_STEPS: [&str; 5] = [
    "Verify owner ID.",
    "Add boundaries + rules (Zones & Hours, No-Transfer).",
    "Set day rate & dates; instant or request-to-book.",
    "Guests book; you get paid after the day ends.",
    "Two-way reviews build reputation.",
];

pub const HUNTER_BENEFITS: [Card; 3] = [
    Card {
        icon: "📍",
        title: "Know before you go",
        text: "Zones & Hours, parking, rule highlights, all visible pre-booking.",
    },
    Card { icon: "🛡", title: "Stay compliant", text: "Upload ID, license, and insurance (if required)." },
    Card { icon: "📅", title: "Book in minutes", text: "Instant confirmation or owner approval." },
];

pub const HUNTER_REQUIREMENTS: [&str; 3] =
    ["Government-issued photo ID", "Valid hunting/fishing license", "Liability insurance (if required)"];

pub const HUNTER_STEPS: [&str; 3] = [
    "Browse properties by species/season.",
    "Review rules & upload required docs.",
    "Book and receive directions + check-in.",
];

pub const LEGAL_HEADING: &str = "Terms • Privacy • Waiver";
pub const LEGAL_TEXT: &str = "OpenAcre is a marketplace connecting property owners with individuals seeking lawful \
                              recreational access (e.g., hunting, fishing). You agree to follow posted and in-app \
                              rules including Zones & Hours, No-Transfer, and Check-In/Out procedures.";

pub const CONTACT_EMAIL: &str = "hello@openacre.co";
pub const CONTACT_PHONE: &str = "(555) 555-5555";
pub const LAUNCH_REGIONS: &str = "Southwestern Ontario (pilot) • Species: Whitetail, Turkey, Waterfowl, Bass, Walleye";

/// `mailto:` link for an address.
pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}

/// Class list for a pricing card.
pub fn plan_class(plan: &Plan) -> &'static str {
    if plan.featured { "plan plan--featured" } else { "plan" }
}
