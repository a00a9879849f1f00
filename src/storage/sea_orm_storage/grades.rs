//! 评分存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades, Relation};
use crate::entity::submissions::Column as SubmissionColumn;
use crate::errors::{LmsError, Result};
use crate::models::grades::{
    entities::Grade,
    requests::CreateGradeRequest,
    responses::GradeRow,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 评分
    ///
    /// 同一提交已有评分时在事务内替换（评分人、等级、反馈、时间全部覆盖），
    /// 并发下由 submission_id 唯一索引兜底。
    pub async fn upsert_grade_impl(
        &self,
        teacher_id: i64,
        grade: CreateGradeRequest,
    ) -> Result<Grade> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| LmsError::database_operation(format!("开启事务失败: {e}")))?;

        let now = chrono::Utc::now().timestamp();

        let existing = Grades::find()
            .filter(Column::SubmissionId.eq(grade.submission_id))
            .one(&txn)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询评分失败: {e}")))?;

        let result = match existing {
            Some(model) => {
                let mut active = model.into_active_model();
                active.teacher_id = Set(teacher_id);
                active.grade = Set(grade.grade);
                active.feedback = Set(grade.feedback);
                active.graded_at = Set(now);
                active
                    .update(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("更新评分失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    submission_id: Set(grade.submission_id),
                    teacher_id: Set(teacher_id),
                    grade: Set(grade.grade),
                    feedback: Set(grade.feedback),
                    graded_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&txn)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("创建评分失败: {e}")))?
            }
        };

        txn.commit()
            .await
            .map_err(|e| LmsError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 学生视角：自己提交获得的评分
    pub async fn list_grades_by_student_impl(&self, student_id: i64) -> Result<Vec<GradeRow>> {
        let rows = Grades::find()
            .join(JoinType::InnerJoin, Relation::Submission.def())
            .filter(SubmissionColumn::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询评分列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| Self::into_grade_row(m)).collect())
    }

    /// 教师视角：自己给出的评分
    pub async fn list_grades_by_teacher_impl(&self, teacher_id: i64) -> Result<Vec<GradeRow>> {
        let rows = Grades::find()
            .filter(Column::TeacherId.eq(teacher_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询评分列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| Self::into_grade_row(m)).collect())
    }

    fn into_grade_row(model: crate::entity::grades::Model) -> GradeRow {
        let grade = model.into_grade();
        GradeRow {
            id: grade.id,
            submission: grade.submission_id,
            grade: grade.grade,
            feedback: grade.feedback,
            graded_at: grade.graded_at,
        }
    }
}
