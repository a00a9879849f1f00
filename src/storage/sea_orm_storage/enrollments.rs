//! 选课记录存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments, Relation};
use crate::entity::users::Column as UserColumn;
use crate::errors::{LmsError, Result};
use crate::models::courses::entities::Course;
use crate::models::enrollments::{entities::Enrollment, responses::EnrollmentRow};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

// 选课列表联查行
#[derive(FromQueryResult)]
struct EnrollmentJoined {
    id: i64,
    student: String,
    course: String,
    enrolled_at: i64,
}

impl SeaOrmStorage {
    /// 选课
    ///
    /// 事务内先校验课程存在与未重复选课，再插入，
    /// 并发下由 (student_id, course_id) 唯一索引兜底。
    pub async fn enroll_student_impl(&self, student_id: i64, course_id: i64) -> Result<Enrollment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let course = Courses::find_by_id(course_id)
            .one(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        if course.is_none() {
            return Err(LmsError::not_found("Course not found"));
        }

        let existing = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::StudentId.eq(student_id))
                    .add(Column::CourseId.eq(course_id)),
            )
            .one(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        if existing.is_some() {
            return Err(LmsError::conflict("Already enrolled in this course"));
        }

        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            course_id: Set(course_id),
            enrolled_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建选课记录失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 学生视角：自己的选课记录
    pub async fn list_enrollments_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<EnrollmentRow>> {
        let select = Enrollments::find().filter(Column::StudentId.eq(student_id));
        self.fetch_enrollment_rows(select).await
    }

    /// 教师视角：所授课程的选课记录
    pub async fn list_enrollments_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<EnrollmentRow>> {
        let select = Enrollments::find().filter(CourseColumn::TeacherId.eq(teacher_id));
        self.fetch_enrollment_rows(select).await
    }

    async fn fetch_enrollment_rows(
        &self,
        select: sea_orm::Select<Enrollments>,
    ) -> Result<Vec<EnrollmentRow>> {
        let rows = select
            .join(JoinType::InnerJoin, Relation::Student.def())
            .join(JoinType::InnerJoin, Relation::Course.def())
            .select_only()
            .column(Column::Id)
            .column_as(UserColumn::Name, "student")
            .column_as(CourseColumn::Title, "course")
            .column(Column::EnrolledAt)
            .order_by_asc(Column::Id)
            .into_model::<EnrollmentJoined>()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| EnrollmentRow {
                id: r.id,
                student: r.student,
                course: r.course,
                enrolled_at: chrono::DateTime::from_timestamp(r.enrolled_at, 0)
                    .unwrap_or_default(),
            })
            .collect())
    }

    /// 学生是否已选某课程
    pub async fn is_enrolled_impl(&self, student_id: i64, course_id: i64) -> Result<bool> {
        let existing = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::StudentId.eq(student_id))
                    .add(Column::CourseId.eq(course_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(existing.is_some())
    }

    /// 学生已选课程的 ID 集合
    pub async fn list_enrolled_course_ids_impl(&self, student_id: i64) -> Result<Vec<i64>> {
        let rows = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.course_id).collect())
    }

    /// 学生已选课程
    pub async fn list_enrolled_courses_impl(&self, student_id: i64) -> Result<Vec<Course>> {
        let rows = Enrollments::find()
            .filter(Column::StudentId.eq(student_id))
            .find_also_related(Courses)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询已选课程失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, course)| course.map(|c| c.into_course()))
            .collect())
    }
}
