use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub image: String,
    pub is_viewed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub username: String,
    pub avatar: String,
    pub image: String,
    pub caption: String,
    pub likes: u64,
    pub comments: u64,
    pub is_liked: bool,
    pub time_ago: String,
    pub era: String,
}

impl Post {
    fn toggle_like(&mut self) {
        if self.is_liked {
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.likes += 1;
        }
        self.is_liked = !self.is_liked;
    }
}

/// Feed state for one visit. Likes and views are local only.
#[derive(Debug, Clone, Default)]
pub struct SocialFeed {
    posts: Vec<Post>,
    stories: Vec<Story>,
}

impl SocialFeed {
    pub fn new(posts: Vec<Post>, stories: Vec<Story>) -> Self {
        Self { posts, stories }
    }

    /// Feed seeded with the built-in sample posts and stories.
    pub fn sample() -> Self {
        Self::new(sample_posts(), sample_stories())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Flips the like on a post. Returns the updated post, or `None` if the
    /// id is unknown.
    pub fn toggle_like(&mut self, post_id: &str) -> Option<&Post> {
        let post = self.posts.iter_mut().find(|p| p.id == post_id)?;
        post.toggle_like();
        Some(post)
    }

    pub fn view_story(&mut self, story_id: &str) -> Option<&Story> {
        let story = self.stories.iter_mut().find(|s| s.id == story_id)?;
        story.is_viewed = true;
        Some(story)
    }
}

const UNSPLASH: &str = "https://images.unsplash.com";

fn story(id: &str, username: &str, avatar: &str, image: &str, is_viewed: bool) -> Story {
    Story {
        id: id.to_string(),
        username: username.to_string(),
        avatar: format!("{UNSPLASH}/{avatar}?w=150&h=150&fit=crop&crop=face"),
        image: format!("{UNSPLASH}/{image}?w=400&h=600&fit=crop"),
        is_viewed,
    }
}

fn sample_stories() -> Vec<Story> {
    vec![
        story("1", "swiftie_forever", "photo-1494790108755-2616b332b044", "photo-1493225457124-a3eb161ffa5f", false),
        story("2", "taylor_era_13", "photo-1438761681033-6461ffad8d80", "photo-1614624532983-4ce03382d63d", true),
        story("3", "folklore_vibes", "photo-1534528741775-53994a69daeb", "photo-1441974231531-c6227db76b6e", false),
    ]
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    username: &str,
    avatar: &str,
    image: &str,
    caption: &str,
    (likes, comments): (u64, u64),
    is_liked: bool,
    time_ago: &str,
    era: &str,
) -> Post {
    Post {
        id: id.to_string(),
        username: username.to_string(),
        avatar: format!("{UNSPLASH}/{avatar}?w=150&h=150&fit=crop&crop=face"),
        image: format!("{UNSPLASH}/{image}?w=600&h=600&fit=crop"),
        caption: caption.to_string(),
        likes,
        comments,
        is_liked,
        time_ago: time_ago.to_string(),
        era: era.to_string(),
    }
}

fn sample_posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "swiftie_forever",
            "photo-1494790108755-2616b332b044",
            "photo-1493225457124-a3eb161ffa5f",
            "Shaking off the bad vibes with this 1989 masterpiece! #ShakeItOff #1989Era",
            (1547, 89),
            false,
            "2 hours ago",
            "1989",
        ),
        post(
            "2",
            "reputation_stan",
            "photo-1507003211169-0a1dd7228f2d",
            "photo-1614624532983-4ce03382d63d",
            "Look what you made me do... fall in love with this era all over again #ReputationEra",
            (2341, 156),
            true,
            "4 hours ago",
            "Reputation",
        ),
        post(
            "3",
            "folklore_vibes",
            "photo-1534528741775-53994a69daeb",
            "photo-1441974231531-c6227db76b6e",
            "Cardigan weather is here and I am living for it. The storytelling in folklore is unmatched",
            (987, 67),
            false,
            "6 hours ago",
            "Folklore",
        ),
        post(
            "4",
            "midnights_lover",
            "photo-1544725176-7c40e5a71c5e",
            "photo-1506905925346-21bda4d32df4",
            "It's me, hi, I'm the problem, it's me. Midnights hits different at 3am",
            (3456, 234),
            true,
            "8 hours ago",
            "Midnights",
        ),
    ]
}
