use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::NewAssignment,
        responses::AssignmentRow,
    },
    auth::requests::UpdateProfileRequest,
    courses::{
        entities::Course,
        requests::CreateCourseRequest,
        responses::{CourseDetail, CourseSummary},
    },
    enrollments::{entities::Enrollment, responses::EnrollmentRow},
    grades::{entities::Grade, requests::CreateGradeRequest, responses::GradeRow},
    submissions::{
        entities::Submission,
        requests::CreateSubmissionRequest,
        responses::SubmissionRow,
    },
    users::{entities::User, requests::NewUser},
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: NewUser) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 部分更新用户资料
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>>;

    /// 课程管理方法
    // 创建课程，归属指定教师
    async fn create_course(&self, teacher_id: i64, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    // 课程详情（含教师名与选课人数）
    async fn get_course_detail(&self, course_id: i64) -> Result<Option<CourseDetail>>;
    // 列出全部课程，教师名悬空时为 None
    async fn list_courses(&self) -> Result<Vec<CourseSummary>>;
    // 列出教师所授课程
    async fn list_courses_by_teacher(&self, teacher_id: i64) -> Result<Vec<Course>>;

    /// 选课管理方法
    // 选课：课程不存在返回 NotFound，重复选课返回 Conflict，事务内检查
    async fn enroll_student(&self, student_id: i64, course_id: i64) -> Result<Enrollment>;
    // 学生视角：自己的选课记录
    async fn list_enrollments_by_student(&self, student_id: i64) -> Result<Vec<EnrollmentRow>>;
    // 教师视角：所授课程的选课记录
    async fn list_enrollments_by_teacher(&self, teacher_id: i64) -> Result<Vec<EnrollmentRow>>;
    // 学生是否已选某课程
    async fn is_enrolled(&self, student_id: i64, course_id: i64) -> Result<bool>;
    // 学生已选课程的ID集合
    async fn list_enrolled_course_ids(&self, student_id: i64) -> Result<Vec<i64>>;
    // 学生已选课程
    async fn list_enrolled_courses(&self, student_id: i64) -> Result<Vec<Course>>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(&self, assignment: NewAssignment) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 按课程集合列出作业（学生视角）
    async fn list_assignments_by_courses(&self, course_ids: &[i64]) -> Result<Vec<AssignmentRow>>;
    // 列出教师创建的作业
    async fn list_assignments_by_teacher(&self, teacher_id: i64) -> Result<Vec<AssignmentRow>>;

    /// 提交管理方法
    // 创建提交
    async fn create_submission(
        &self,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission>;
    // 通过ID获取提交
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 学生视角：自己的提交
    async fn list_submissions_by_student(&self, student_id: i64) -> Result<Vec<SubmissionRow>>;
    // 教师视角：自己作业收到的提交
    async fn list_submissions_by_teacher(&self, teacher_id: i64) -> Result<Vec<SubmissionRow>>;

    /// 评分管理方法
    // 评分：同一提交已有评分时在事务内替换而非追加
    async fn upsert_grade(&self, teacher_id: i64, grade: CreateGradeRequest) -> Result<Grade>;
    // 学生视角：自己提交获得的评分
    async fn list_grades_by_student(&self, student_id: i64) -> Result<Vec<GradeRow>>;
    // 教师视角：自己给出的评分
    async fn list_grades_by_teacher(&self, teacher_id: i64) -> Result<Vec<GradeRow>>;
}

pub async fn create_storage(config: &DatabaseConfig) -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async(config).await?;
    Ok(Arc::new(storage))
}
