//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::Column as AssignmentColumn;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions, Relation};
use crate::errors::{LmsError, Result};
use crate::models::submissions::{
    entities::Submission,
    requests::CreateSubmissionRequest,
    responses::SubmissionRow,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, FromQueryResult, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

// 提交列表联查行
#[derive(FromQueryResult)]
struct SubmissionJoined {
    id: i64,
    assignment: String,
    content: String,
    submitted_at: i64,
}

impl SeaOrmStorage {
    /// 创建提交
    ///
    /// 同一学生可对同一作业多次提交，记录按追加保存。
    pub async fn create_submission_impl(
        &self,
        student_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            assignment_id: Set(submission.assignment_id),
            student_id: Set(student_id),
            content: Set(submission.content),
            file_path: Set(submission.file_path),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 学生视角：自己的提交
    pub async fn list_submissions_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Vec<SubmissionRow>> {
        let select = Submissions::find().filter(Column::StudentId.eq(student_id));
        self.fetch_submission_rows(select).await
    }

    /// 教师视角：自己作业收到的提交
    pub async fn list_submissions_by_teacher_impl(
        &self,
        teacher_id: i64,
    ) -> Result<Vec<SubmissionRow>> {
        let select = Submissions::find().filter(AssignmentColumn::TeacherId.eq(teacher_id));
        self.fetch_submission_rows(select).await
    }

    async fn fetch_submission_rows(
        &self,
        select: sea_orm::Select<Submissions>,
    ) -> Result<Vec<SubmissionRow>> {
        let rows = select
            .join(JoinType::InnerJoin, Relation::Assignment.def())
            .select_only()
            .column(Column::Id)
            .column_as(AssignmentColumn::Title, "assignment")
            .column(Column::Content)
            .column(Column::SubmittedAt)
            .order_by_asc(Column::Id)
            .into_model::<SubmissionJoined>()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|r| SubmissionRow {
                id: r.id,
                assignment: r.assignment,
                content: r.content,
                submitted_at: chrono::DateTime::from_timestamp(r.submitted_at, 0)
                    .unwrap_or_default(),
            })
            .collect())
    }
}
