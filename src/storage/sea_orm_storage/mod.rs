//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod courses;
mod enrollments;
mod grades;
mod submissions;
mod users;

use crate::config::DatabaseConfig;
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    ///
    /// 数据库配置由调用方注入，本层不读取任何全局状态。
    pub async fn new_async(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{entities::Assignment, requests::NewAssignment, responses::AssignmentRow},
    auth::requests::UpdateProfileRequest,
    courses::{
        entities::Course,
        requests::CreateCourseRequest,
        responses::{CourseDetail, CourseSummary},
    },
    enrollments::{entities::Enrollment, responses::EnrollmentRow},
    grades::{entities::Grade, requests::CreateGradeRequest, responses::GradeRow},
    submissions::{entities::Submission, requests::CreateSubmissionRequest, responses::SubmissionRow},
    users::{entities::User, requests::NewUser},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: NewUser) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>> {
        self.update_profile_impl(id, update).await
    }

    // 课程模块
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(teacher_id, course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn get_course_detail(&self, course_id: i64) -> Result<Option<CourseDetail>> {
        self.get_course_detail_impl(course_id).await
    }

    async fn list_courses(&self) -> Result<Vec<CourseSummary>> {
        self.list_courses_impl().await
    }

    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>> {
        self.list_courses_by_teacher_impl(teacher_id).await
    }

    // 选课模块
    async fn enroll_student(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        self.enroll_student_impl(student_id, course_id).await
    }

    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<EnrollmentRow>> {
        self.list_enrollments_by_student_impl(student_id).await
    }

    async fn list_enrollments_by_teacher(&self, teacher_id: i64) -> Result<Vec<EnrollmentRow>> {
        self.list_enrollments_by_teacher_impl(teacher_id).await
    }

    async fn is_enrolled(&self, student_id: i64, course_id: i64) -> Result<bool> {
        self.is_enrolled_impl(student_id, course_id).await
    }

    async fn list_enrolled_course_ids(&self, student_id: i64) -> Result<Vec<i64>> {
        self.list_enrolled_course_ids_impl(student_id).await
    }

    async fn list_enrolled_courses(&self, student_id: i64) -> Result<Vec<Course>> {
        self.list_enrolled_courses_impl(student_id).await
    }

    // 作业模块
    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment> {
        self.create_assignment_impl(assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_by_courses(&self, course_ids: &[i64]) -> Result<Vec<AssignmentRow>> {
        self.list_assignments_by_courses_impl(course_ids).await
    }

    async fn list_assignments_by_teacher(&self, teacher_id: i64) -> Result<Vec<AssignmentRow>> {
        self.list_assignments_by_teacher_impl(teacher_id).await
    }

    // 提交模块
    async fn create_submission(
        &self,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(student_id, submission).await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<SubmissionRow>> {
        self.list_submissions_by_student_impl(student_id).await
    }

    async fn list_submissions_by_teacher(&self, teacher_id: i64) -> Result<Vec<SubmissionRow>> {
        self.list_submissions_by_teacher_impl(teacher_id).await
    }

    // 评分模块
    async fn upsert_grade(&self, teacher_id: i64, grade: CreateGradeRequest) -> Result<Grade> {
        self.upsert_grade_impl(teacher_id, grade).await
    }

    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<GradeRow>> {
        self.list_grades_by_student_impl(student_id).await
    }

    async fn list_grades_by_teacher(&self, teacher_id: i64) -> Result<Vec<GradeRow>> {
        self.list_grades_by_teacher_impl(teacher_id).await
    }
}
