//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments, Relation};
use crate::entity::courses::Column as CourseColumn;
use crate::errors::{LmsError, Result};
use crate::models::assignments::{
    entities::Assignment,
    requests::NewAssignment,
    responses::AssignmentRow,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

// 作业列表联查行
#[derive(FromQueryResult)]
struct AssignmentJoined {
    id: i64,
    title: String,
    description: Option<String>,
    course: String,
    due_date: Option<i64>,
}

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(&self, assignment: NewAssignment) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(assignment.title),
            description: Set(assignment.description),
            course_id: Set(assignment.course_id),
            teacher_id: Set(assignment.teacher_id),
            due_date: Set(assignment.due_date.map(|d| d.timestamp())),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 按课程集合列出作业（学生视角）
    pub async fn list_assignments_by_courses_impl(
        &self,
        course_ids: &[i64],
    ) -> Result<Vec<AssignmentRow>> {
        if course_ids.is_empty() {
            return Ok(Vec::new());
        }

        let select = Assignments::find().filter(Column::CourseId.is_in(course_ids.to_vec()));
        self.fetch_assignment_rows(select).await
    }

    /// 列出教师创建的作业
    pub async fn list_assignments_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<AssignmentRow>> {
        let select = Assignments::find().filter(Column::TeacherId.eq(teacher_id));
        self.fetch_assignment_rows(select).await
    }

    async fn fetch_assignment_rows(
        &self,
        select: sea_orm::Select<Assignments>,
    ) -> Result<Vec<AssignmentRow>> {
        let rows = select
            .join(JoinType::InnerJoin, Relation::Course.def())
            .select_only()
            .column(Column::Id)
            .column(Column::Title)
            .column(Column::Description)
            .column_as(CourseColumn::Title, "course")
            .column(Column::DueDate)
            .order_by_asc(Column::Id)
            .into_model::<AssignmentJoined>()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| AssignmentRow {
                id: r.id,
                title: r.title,
                description: r.description,
                course: r.course,
                due_date: r
                    .due_date
                    .map(|ts| chrono::DateTime::from_timestamp(ts, 0).unwrap_or_default()),
            })
            .collect())
    }
}
