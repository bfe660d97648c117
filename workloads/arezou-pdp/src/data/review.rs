//! Review and story data.

use serde::Serialize;

/// A customer review.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: u32,
    pub author: &'static str,
    /// 1 to 5.
    pub rating: u8,
    pub headline: &'static str,
    pub body: &'static str,
    pub date: &'static str,
    pub skin_type: &'static str,
    pub usage_duration: &'static str,
    pub verified: bool,
    pub helpful: u32,
    pub tags: &'static [&'static str],
}

impl Review {
    /// First letter of the author's name, for the avatar.
    pub fn initial(&self) -> char {
        self.author.chars().next().unwrap_or('?')
    }
}

/// How often a storyteller has bought from the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CustomerType {
    New,
    Returning,
    Loyal,
}

impl CustomerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerType::New => "New",
            CustomerType::Returning => "Returning",
            CustomerType::Loyal => "Loyal",
        }
    }
}

/// A review told as a customer story, with where it came from.
#[derive(Debug, Clone, Serialize)]
pub struct Story {
    pub review: Review,
    pub location: &'static str,
    pub customer_type: CustomerType,
}

/// Aggregate figures shown above a list of reviews.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewStats {
    pub average: f32,
    pub total: u32,
    pub verified_percent: u8,
    pub recommend_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_this_month: Option<u32>,
}

pub static COMMUNITY_STATS: ReviewStats = ReviewStats {
    average: 4.9,
    total: 198,
    verified_percent: 94,
    recommend_percent: 97,
    new_this_month: None,
};

pub static TRUST_STATS: ReviewStats = ReviewStats {
    average: 4.8,
    total: 262,
    verified_percent: 83,
    recommend_percent: 89,
    new_this_month: Some(13),
};

pub static REVIEWS: &[Review] = &[
    Review {
        id: 1,
        author: "Priya S.",
        rating: 5,
        headline: "My skin has never felt softer",
        body: "I was skeptical at first, but after 2 weeks of consistent use, my skin is visibly \
               brighter and more hydrated. The bergamot scent is divine!",
        date: "2 days ago",
        skin_type: "Combination",
        usage_duration: "2 weeks",
        verified: true,
        helpful: 24,
        tags: &["Brightening", "Hydrating"],
    },
    Review {
        id: 2,
        author: "Ananya M.",
        rating: 5,
        headline: "Perfect for my nighttime routine",
        body: "I apply this before bed and wake up with such glowing skin. It absorbs quickly \
               without feeling greasy.",
        date: "1 week ago",
        skin_type: "Dry",
        usage_duration: "1 month",
        verified: true,
        helpful: 18,
        tags: &["Non-greasy", "Glow"],
    },
    Review {
        id: 3,
        author: "Sneha R.",
        rating: 4,
        headline: "Transformed my dull skin",
        body: "The team was very helpful and guided me throughout my purchase. Fast delivery and \
               great packaging.",
        date: "3 weeks ago",
        skin_type: "Oily",
        usage_duration: "3 weeks",
        verified: true,
        helpful: 12,
        tags: &["Good Service", "Premium"],
    },
    Review {
        id: 4,
        author: "Meera K.",
        rating: 5,
        headline: "Holy grail product!",
        body: "I received a fast response from the customer service team. The product quality \
               is amazing!",
        date: "1 month ago",
        skin_type: "Normal",
        usage_duration: "2 months",
        verified: true,
        helpful: 8,
        tags: &["Premium", "Natural"],
    },
    Review {
        id: 5,
        author: "Kavya D.",
        rating: 5,
        headline: "Worth every penny",
        body: "Finally a face oil that doesn't break me out! My sensitive skin loves this formula.",
        date: "5 days ago",
        skin_type: "Sensitive",
        usage_duration: "3 weeks",
        verified: true,
        helpful: 15,
        tags: &["Sensitive Skin", "Gentle"],
    },
    Review {
        id: 6,
        author: "Riya P.",
        rating: 5,
        headline: "Obsessed with the glow",
        body: "My friends keep asking what I'm using differently. This oil gives the most \
               natural, healthy glow!",
        date: "2 weeks ago",
        skin_type: "Normal",
        usage_duration: "6 weeks",
        verified: true,
        helpful: 21,
        tags: &["Natural Glow", "Compliments"],
    },
];

pub static STORIES: &[Story] = &[
    Story {
        review: Review {
            id: 101,
            author: "Priya S.",
            rating: 5,
            headline: "My morning skin is unbelievable now",
            body: "I have been using the Arezou Oil for the past 2 months and I am absolutely \
                   satisfied by the results. My skin looks and feels so much healthier and more \
                   radiant. I highly recommend this product to anyone looking to revitalize \
                   their skin.",
            date: "2 weeks ago",
            skin_type: "Dry",
            usage_duration: "2 months",
            verified: true,
            helpful: 24,
            tags: &["Effective", "Natural"],
        },
        location: "Mumbai",
        customer_type: CustomerType::New,
    },
    Story {
        review: Review {
            id: 102,
            author: "Ananya S.",
            rating: 5,
            headline: "A youthful glow I didn't expect",
            body: "Arezou has not only improved my skin tone but also given it a youthful look. I \
                   am getting numerous compliments for the newfound glow and it has definitely \
                   boosted my confidence to take care of myself.",
            date: "1 month ago",
            skin_type: "Combination",
            usage_duration: "3 months",
            verified: true,
            helpful: 18,
            tags: &["Premium", "Glowing"],
        },
        location: "Bangalore",
        customer_type: CustomerType::Returning,
    },
    Story {
        review: Review {
            id: 103,
            author: "Meera A.",
            rating: 5,
            headline: "So soothing, visible difference",
            body: "The oil you sent is very very soothing and I can see the difference slowly. \
                   Thank you for this! My sensitive skin has never felt better and the scent is \
                   divine.",
            date: "3 weeks ago",
            skin_type: "Sensitive",
            usage_duration: "1 month",
            verified: true,
            helpful: 12,
            tags: &["Gentle"],
        },
        location: "Delhi",
        customer_type: CustomerType::New,
    },
    Story {
        review: Review {
            id: 104,
            author: "Divya I.",
            rating: 5,
            headline: "Essential oils done right",
            body: "As I have used the essential oils, I am very happy with them. The face oil is \
                   also good. Thanks! The quality is evident from the first use and the \
                   packaging is beautiful.",
            date: "1 month ago",
            skin_type: "Normal",
            usage_duration: "6 weeks",
            verified: true,
            helpful: 9,
            tags: &["Natural", "Pure"],
        },
        location: "Chennai",
        customer_type: CustomerType::New,
    },
    Story {
        review: Review {
            id: 105,
            author: "Sneha G.",
            rating: 5,
            headline: "Love at first application ❤️",
            body: "OMG! This face oil is everything I wanted. Got it 4-5 days back and have been \
                   using it daily. Gets absorbed so smoothly and the bergamot scent is heavenly.",
            date: "5 days ago",
            skin_type: "Oily",
            usage_duration: "1 week",
            verified: true,
            helpful: 7,
            tags: &["Fast-absorbing"],
        },
        location: "Pune",
        customer_type: CustomerType::New,
    },
    Story {
        review: Review {
            id: 106,
            author: "Arjun P.",
            rating: 5,
            headline: "Like a spa treatment at home",
            body: "This oil has an amazing collection! This face oil transports me to a luxury \
                   spa experience. The aromatherapy aspect is so calming after a long day at \
                   work.",
            date: "2 months ago",
            skin_type: "Normal",
            usage_duration: "2 months",
            verified: true,
            helpful: 15,
            tags: &["Relaxing", "Premium"],
        },
        location: "Hyderabad",
        customer_type: CustomerType::Loyal,
    },
];
