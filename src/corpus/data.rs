//! Static content tables for the five devotional categories.
//!
//! Text, order, and pool sizes are part of the date-to-content contract;
//! see the module docs in [`super`]. Append-only edits are not safe either,
//! because selection is modulo pool length.

use super::{ContentPool, Scripture};

pub(super) static MARRIAGE: ContentPool = ContentPool {
    focuses: &[
        "God at the center",
        "Unity and agreement",
        "Christlike love",
        "Communication and understanding",
        "Forgiveness and healing",
        "Faithfulness and protection",
        "Gratitude and renewal",
        "Friendship and joy",
        "Healthy conflict resolution",
        "Respect and honor",
        "Intimacy and tenderness",
        "Servant leadership",
        "Financial unity and stewardship",
        "Time, priorities, and boundaries",
        "Prayer partnership",
    ],
    scriptures: &[
        Scripture {
            reference: "Ecclesiastes 4:12",
            theme: "God strengthens a covenant",
        },
        Scripture {
            reference: "Amos 3:3",
            theme: "Walking in agreement",
        },
        Scripture {
            reference: "Ephesians 5:25",
            theme: "Sacrificial love",
        },
        Scripture {
            reference: "James 1:19",
            theme: "Listen before speaking",
        },
        Scripture {
            reference: "Colossians 3:13",
            theme: "Forgive as Christ forgave",
        },
        Scripture {
            reference: "Proverbs 4:23",
            theme: "Guard the heart",
        },
        Scripture {
            reference: "Psalm 103:2",
            theme: "Remember God’s benefits",
        },
        Scripture {
            reference: "1 Corinthians 13:4–7",
            theme: "Love’s character",
        },
        Scripture {
            reference: "Proverbs 15:1",
            theme: "Gentle answer turns away wrath",
        },
        Scripture {
            reference: "Ephesians 4:2–3",
            theme: "Keep unity in peace",
        },
    ],
    prayers: &[
        "Lord, be the center of our marriage. Establish our covenant in Your strength.",
        "Unite our hearts and give us one mind in Christ.",
        "Teach us to love sacrificially and consistently.",
        "Guard our words; make us quick to listen and slow to speak.",
        "Help us forgive quickly and restore trust with wisdom.",
        "Protect our marriage from temptation, distraction, and division.",
        "Renew our joy and friendship. Rekindle tenderness and respect.",
        "Guide our decisions and align our priorities with Your will.",
    ],
    prompts: &[
        "What would it look like for God to be more central in our marriage this week?",
        "Where do we need clearer unity or better communication?",
        "Is there anything we need to forgive or address gently and directly?",
        "What is one practical way I can honor my spouse today?",
        "What boundary or habit would strengthen our relationship?",
    ],
    actions: &[
        "Do one small act of honor for your spouse today (quietly, just love).",
        "Ask: “What would make you feel supported this week?” and listen fully.",
        "Bless your spouse out loud with a short prayer before bed.",
        "Apologize quickly for anything the Holy Spirit brings to mind.",
    ],
};

pub(super) static BLENDED_FAMILY: ContentPool = ContentPool {
    focuses: &[
        "Unity and peace in the home",
        "Grace for transitions",
        "Healing past wounds",
        "Healthy boundaries",
        "Respect between households",
        "Consistency and stability",
        "Communication with kindness",
        "Steadfast love and patience",
        "Shared family culture",
        "Godly influence and protection",
    ],
    scriptures: &[
        Scripture {
            reference: "Psalm 133:1",
            theme: "Dwelling together in unity",
        },
        Scripture {
            reference: "Colossians 3:12–14",
            theme: "Compassion and love",
        },
        Scripture {
            reference: "Romans 12:18",
            theme: "Live peaceably as possible",
        },
        Scripture {
            reference: "James 1:19",
            theme: "Listen and respond wisely",
        },
        Scripture {
            reference: "Psalm 147:3",
            theme: "Heals the brokenhearted",
        },
        Scripture {
            reference: "Ephesians 4:29",
            theme: "Words that build up",
        },
        Scripture {
            reference: "Proverbs 3:5–6",
            theme: "Guidance for decisions",
        },
    ],
    prayers: &[
        "Lord, establish peace in our home and unity within our blended family.",
        "Give us grace for transitions and patience in the process.",
        "Heal wounds from the past and help us build a new culture of love.",
        "Teach us healthy boundaries and wise communication with all involved.",
        "Give our children security, stability, and confidence in Your love.",
    ],
    prompts: &[
        "Where do we need more patience and grace in our blended family?",
        "What is one step we can take to build safety and stability for the children?",
        "Are there boundaries that need to be clarified in love?",
        "How can we speak words that build rather than divide?",
    ],
    actions: &[
        "Choose one moment today to respond with extra patience and calm.",
        "Discuss one boundary that would increase stability for the children.",
        "Speak one affirming sentence to each child today.",
        "Pray for unity across households with humility and wisdom.",
    ],
};

pub(super) static CHILDREN: ContentPool = ContentPool {
    focuses: &[
        "Peace and emotional stability",
        "Wisdom and discernment",
        "Salvation and spiritual hunger",
        "Protection and godly friends",
        "Purpose and identity in Christ",
        "Obedience and teachability",
        "Healing and restoration",
        "Courage and faith",
        "Integrity and character",
        "Healthy decision-making",
        "Freedom from fear",
        "Respect and honor",
    ],
    scriptures: &[
        Scripture {
            reference: "Isaiah 54:13",
            theme: "Taught by the Lord; great peace",
        },
        Scripture {
            reference: "Proverbs 22:6",
            theme: "Train up a child",
        },
        Scripture {
            reference: "Acts 16:31",
            theme: "Believe and be saved",
        },
        Scripture {
            reference: "Psalm 91:11",
            theme: "Angelic protection",
        },
        Scripture {
            reference: "Jeremiah 29:11",
            theme: "Future and hope",
        },
        Scripture {
            reference: "James 1:5",
            theme: "Wisdom from God",
        },
        Scripture {
            reference: "2 Timothy 1:7",
            theme: "Power, love, sound mind",
        },
        Scripture {
            reference: "Psalm 139:14",
            theme: "Wonderfully made",
        },
    ],
    prayers: &[
        "Lord, teach our children Your ways and establish peace in them.",
        "Give them wisdom, discernment, and godly friends.",
        "Protect them from harm and from influences that pull them from You.",
        "Reveal their identity and purpose in Christ.",
        "Draw them into sincere faith and a love for Your Word.",
    ],
    prompts: &[
        "Which child (or area) needs focused prayer today, and why?",
        "What virtue do we want to model more clearly as parents?",
        "What protective boundary or routine would help our children thrive?",
        "How can we speak life and purpose over our children today?",
    ],
    actions: &[
        "Speak one blessing over a child by name (even if they are not present).",
        "Ask a child a heart question: “How are you really doing?”",
        "Pray specifically for godly friends and mentors for your children.",
        "Model one Christlike response in a stressful moment.",
    ],
};

pub(super) static PARENTS: ContentPool = ContentPool {
    focuses: &[
        "Honor and patience",
        "Health and strength",
        "Peace and comfort",
        "Salvation and spiritual growth",
        "Reconciliation and restored relationships",
        "Wisdom for decisions",
        "Provision and stability",
        "Legacy and generational faith",
    ],
    scriptures: &[
        Scripture {
            reference: "Exodus 20:12",
            theme: "Honor father and mother",
        },
        Scripture {
            reference: "3 John 1:2",
            theme: "Health and well-being",
        },
        Scripture {
            reference: "Psalm 32:8",
            theme: "Guidance and instruction",
        },
        Scripture {
            reference: "Psalm 145:4",
            theme: "One generation praises another",
        },
        Scripture {
            reference: "Romans 12:18",
            theme: "Live peaceably",
        },
        Scripture {
            reference: "Philippians 4:19",
            theme: "God supplies needs",
        },
        Scripture {
            reference: "Isaiah 46:4",
            theme: "God carries in old age",
        },
    ],
    prayers: &[
        "Lord, help us honor our parents with love, patience, and humility.",
        "Strengthen them in body and mind; surround them with peace.",
        "Where relationships are strained, bring reconciliation and healing.",
        "Draw them close to You and deepen their faith.",
    ],
    prompts: &[
        "What does honoring our parents look like in this season?",
        "Is there a practical act of care we can offer this week?",
        "Is there anything we need to forgive or address for reconciliation?",
        "What legacy of faith do we want to continue?",
    ],
    actions: &[
        "Reach out to a parent/in-law with encouragement or practical support.",
        "Pray for health and peace specifically by name.",
        "If appropriate, take one step toward reconciliation with wisdom.",
        "Honor your parents with words today—choose respect over criticism.",
    ],
};

pub(super) static GRANDCHILDREN: ContentPool = ContentPool {
    focuses: &[
        "Blessing and favor",
        "Protection and innocence",
        "Early love for God",
        "Wisdom and joyful growth",
        "Future paths and callings",
        "Healthy friendships and mentors",
        "Peace and stability",
        "Generational blessing",
    ],
    scriptures: &[
        Scripture {
            reference: "Psalm 127:3",
            theme: "Children are a heritage",
        },
        Scripture {
            reference: "Proverbs 22:6",
            theme: "Train up a child",
        },
        Scripture {
            reference: "Matthew 18:10",
            theme: "God’s care for little ones",
        },
        Scripture {
            reference: "Psalm 103:17",
            theme: "Mercy to children’s children",
        },
        Scripture {
            reference: "Psalm 37:23",
            theme: "The Lord orders steps",
        },
        Scripture {
            reference: "Isaiah 54:13",
            theme: "Great peace",
        },
        Scripture {
            reference: "Luke 2:52",
            theme: "Grow in wisdom and favor",
        },
    ],
    prayers: &[
        "Lord, bless our grandchildren with wisdom, protection, and joy.",
        "Guard their hearts and minds; keep them safe and anchored in truth.",
        "Plant an early love for You and a hunger for Your Word.",
        "Order their steps and prepare their future callings.",
    ],
    prompts: &[
        "What specific blessing do we want to speak over our grandchildren today?",
        "Where do they need protection (physically, emotionally, spiritually)?",
        "What faith practices can we model or share with them?",
        "What hopes are we entrusting to God for their future?",
    ],
    actions: &[
        "Pray blessings over your grandchildren by name.",
        "Share one faith story with a grandchild (age-appropriate).",
        "Pray for their future callings and protection.",
        "Speak peace and identity over them (loved, safe, and seen by God).",
    ],
};

/// Action steps available to every category, appended after the
/// category-specific pool during selection.
pub(super) static SHARED_ACTIONS: &[&str] = &[
    "Pray aloud together for 2 minutes each.",
    "Share one gratitude and one need with gentleness.",
    "Send one encouraging text to your spouse today.",
    "Schedule 20 minutes to talk without distractions.",
    "Write down one area to surrender to God and pray over it.",
];
