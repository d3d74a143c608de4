use anyhow::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// One row of the fixed training catalog.
struct SeedTraining {
    title: &'static str,
    image: &'static str,
    description: &'static str,
    category: &'static str,
    intensity: &'static str,
    duration: &'static str,
    group_size: &'static str,
}

const SEED_TRAININGS: [SeedTraining; 7] = [
    SeedTraining {
        title: "Mindful Yoga Flow",
        image: "/yoga.jpg",
        description: "Experience the perfect harmony of breath and movement in our signature yoga sessions designed to enhance mindfulness while building core strength and flexibility.",
        category: "Mindfulness",
        intensity: "Gentle",
        duration: "60 min",
        group_size: "Small Group (8 max)",
    },
    SeedTraining {
        title: "Elite Boxing Training",
        image: "/boxing.jpg",
        description: "Transform your fitness with high-intensity boxing drills that combine technique, speed, and power for a complete body transformation.",
        category: "Combat Sports",
        intensity: "High",
        duration: "75 min",
        group_size: "Private & Group",
    },
    SeedTraining {
        title: "Endurance Running Program",
        image: "/running.jpg",
        description: "Master the art of endurance with personalized running plans that adapt to your fitness level and help you achieve new personal records.",
        category: "Cardio",
        intensity: "Medium-High",
        duration: "45-90 min",
        group_size: "Solo & Group",
    },
    SeedTraining {
        title: "Strength & Conditioning",
        image: "/weightlifting.jpg",
        description: "Build functional strength with our scientific approach to weight training, focusing on proper form and progressive overload.",
        category: "Strength",
        intensity: "High",
        duration: "60 min",
        group_size: "Personal Training",
    },
    SeedTraining {
        title: "Indoor Cycling Experience",
        image: "/cycling.jpg",
        description: "Immersive cycling sessions with virtual terrain that push your limits while protecting your joints in a high-energy environment.",
        category: "Cardio",
        intensity: "Medium",
        duration: "45 min",
        group_size: "Studio Class (20 max)",
    },
    SeedTraining {
        title: "E-Sports Performance Training",
        image: "/gaming.jpg",
        description: "Enhance cognitive function, reaction time, and focus through specialized gaming fitness routines designed for digital athletes.",
        category: "Mental Fitness",
        intensity: "Low-Medium",
        duration: "50 min",
        group_size: "Individual",
    },
    SeedTraining {
        title: "Coastal Sailing Adventure",
        image: "/sailing.jpg",
        description: "Combine fitness with adventure in our unique sailing sessions that build core stability and balance while enjoying coastal scenery.",
        category: "Outdoor",
        intensity: "Light",
        duration: "Half Day",
        group_size: "Small Group (6 max)",
    },
];

/// Number of rows in the built-in training catalog.
pub const SEED_TRAINING_COUNT: usize = SEED_TRAININGS.len();

pub struct DatabaseSeeder {
    pool: SqlitePool,
}

impl DatabaseSeeder {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn seed_all(&self) -> Result<()> {
        tracing::info!("Starting database seeding...");

        self.seed_trainings().await?;
        self.purge_expired_sessions().await?;

        tracing::info!("Database seeding completed!");
        Ok(())
    }

    /// Insert the training catalog unless the table already has rows.
    /// Returns whether anything was inserted.
    pub async fn seed_trainings(&self) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM trainings")
            .fetch_one(&self.pool)
            .await?;

        if count > 0 {
            tracing::debug!(count, "Training catalog already seeded");
            return Ok(false);
        }

        let mut tx = self.pool.begin().await?;
        for training in &SEED_TRAININGS {
            sqlx::query(
                "INSERT INTO trainings (title, image, description, category, intensity, duration, group_size)
                 VALUES (?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(training.title)
            .bind(training.image)
            .bind(training.description)
            .bind(training.category)
            .bind(training.intensity)
            .bind(training.duration)
            .bind(training.group_size)
            .execute(&mut *tx)
            .await?;
        }
        tx.commit().await?;

        tracing::info!(count = SEED_TRAINING_COUNT, "Seeded training catalog");
        Ok(true)
    }

    /// Drop sessions whose expiry has already passed.
    pub async fn purge_expired_sessions(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(Utc::now().timestamp())
            .execute(&self.pool)
            .await?;

        let purged = result.rows_affected();
        if purged > 0 {
            tracing::info!(purged, "Removed expired sessions");
        }
        Ok(purged)
    }
}
