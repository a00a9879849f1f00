//! 课程存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses, Relation};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::users::Column as UserColumn;
use crate::errors::{LmsError, Result};
use crate::models::courses::{
    entities::Course,
    requests::CreateCourseRequest,
    responses::{CourseDetail, CourseSummary},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

// 课程列表联查行
#[derive(FromQueryResult)]
struct CourseJoined {
    id: i64,
    title: String,
    description: Option<String>,
    teacher: Option<String>,
}

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(
        &self,
        teacher_id: i64,
        course: CreateCourseRequest,
    ) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(course.title),
            description: Set(course.description),
            teacher_id: Set(teacher_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 课程详情（含教师名与选课人数）
    pub async fn get_course_detail_impl(&self, course_id: i64) -> Result<Option<CourseDetail>> {
        let found = Courses::find_by_id(course_id)
            .find_also_related(crate::entity::users::Entity)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        let Some((course, teacher)) = found else {
            return Ok(None);
        };

        let enrolled_count = Enrollments::find()
            .filter(EnrollmentColumn::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课人数失败: {e}")))?;

        let course = course.into_course();
        Ok(Some(CourseDetail {
            id: course.id,
            title: course.title,
            description: course.description,
            teacher: teacher.map(|t| t.name),
            enrolled_count: enrolled_count as i64,
            created_at: course.created_at,
        }))
    }

    /// 列出全部课程
    ///
    /// LEFT JOIN 教师表：引用悬空时教师名为 None，行仍然返回。
    pub async fn list_courses_impl(&self) -> Result<Vec<CourseSummary>> {
        let rows = Courses::find()
            .join(JoinType::LeftJoin, Relation::Teacher.def())
            .select_only()
            .column(Column::Id)
            .column(Column::Title)
            .column(Column::Description)
            .column_as(UserColumn::Name, "teacher")
            .order_by_asc(Column::Id)
            .into_model::<CourseJoined>()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| CourseSummary {
                id: r.id,
                title: r.title,
                description: r.description,
                teacher: r.teacher,
            })
            .collect())
    }

    /// 列出教师所授课程
    pub async fn list_courses_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<Course>> {
        let rows = Courses::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_course()).collect())
    }
}
