//! Fixed content for the Home, Rewards and Profile screens.

pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Reward {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct FeaturedReward {
    pub title: &'static str,
    pub code: &'static str,
    pub description: &'static str,
    pub valid_until: &'static str,
}

pub struct Profile {
    pub name: &'static str,
    pub status: &'static str,
    pub stats: [(&'static str, u32); 3],
    pub collection: [(&'static str, u32); 4],
}

pub const HOME_TITLE: &str = "Welcome to POPMART";
pub const HOME_SUBTITLE: &str = "Start Your Adventure";
pub const HOME_ACTION: &str = "Scan Your Toy";

pub const FEATURES: [FeatureCard; 4] = [
    FeatureCard { title: "LABUBU", description: "Scan your LABUBU toy to play" },
    FeatureCard { title: "DIMOO", description: "Play with your DIMOO character" },
    FeatureCard { title: "MOLLY", description: "Join Molly's adventure" },
    FeatureCard { title: "SKULLPANDA", description: "Explore with SKULLPANDA" },
];

pub const FEATURED_REWARD: FeaturedReward = FeaturedReward {
    title: "Game Winner!",
    code: "POPMART2024",
    description: "Use this code to get 10% off your next POPMART purchase!",
    valid_until: "Valid until: December 31, 2024",
};

pub const AVAILABLE_REWARDS: [Reward; 3] = [
    Reward { title: "Win 20% Off", description: "Score 20 points in the bubble game" },
    Reward { title: "Free DIMOO Figure", description: "Collect 5 different DIMOO figures" },
    Reward { title: "Limited Edition LABUBU", description: "Win 10 games in a row" },
];

pub const PROFILE: Profile = Profile {
    name: "Sarah Parker",
    status: "POPMART Collector",
    stats: [("Figures", 12), ("Rewards", 5), ("Games Won", 8)],
    collection: [("LABUBU", 5), ("DIMOO", 3), ("MOLLY", 2), ("SKULLPANDA", 2)],
};
