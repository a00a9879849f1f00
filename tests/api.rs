//! 端到端 API 测试
//!
//! 使用内存 SQLite（单连接池）驱动真实的 actix App，
//! 覆盖认证、课程、选课、作业、提交、评分的完整流程。

use std::sync::Arc;

use actix_web::{App, test, web};
use serde_json::{Value, json};

use rust_lms_next::config::{DatabaseConfig, JwtConfig};
use rust_lms_next::routes;
use rust_lms_next::storage::{Storage, create_storage};
use rust_lms_next::utils::jwt::JwtCodec;
use rust_lms_next::utils::{json_error_handler, query_error_handler};

async fn test_context() -> (Arc<dyn Storage>, JwtCodec) {
    // 内存库限制为单连接，避免每个连接各自为政
    let db_config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };
    let storage = create_storage(&db_config)
        .await
        .expect("Failed to create in-memory storage");

    let codec = JwtCodec::new(&JwtConfig {
        secret: "integration-test-secret".to_string(),
        access_token_expiry: 15,
    });

    (storage, codec)
}

macro_rules! init_app {
    ($storage:expr, $codec:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new($codec.clone()))
                .configure(routes::configure_auth_routes)
                .configure(routes::configure_course_routes)
                .configure(routes::configure_enrollment_routes)
                .configure(routes::configure_assignment_routes)
                .configure(routes::configure_submission_routes)
                .configure(routes::configure_grade_routes)
                .configure(routes::configure_dashboard_routes)
                .configure(routes::configure_system_routes)
                .default_service(web::route().to(routes::system::not_found)),
        )
        .await
    };
}

macro_rules! register_user {
    ($app:expr, $name:expr, $email:expr, $role:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/register")
            .set_json(json!({
                "name": $name,
                "email": $email,
                "password": "secret123",
                "role": $role,
            }))
            .to_request();
        let resp = test::call_service($app, req).await;
        assert_eq!(resp.status(), 201, "registration should succeed");
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

fn token_of(body: &Value) -> String {
    body["data"]["access_token"]
        .as_str()
        .expect("access_token present")
        .to_string()
}

fn user_id_of(body: &Value) -> i64 {
    body["data"]["user"]["id"].as_i64().expect("user id present")
}

#[actix_web::test]
async fn test_health_probe_is_public() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "OK");
}

#[actix_web::test]
async fn test_unmatched_route_returns_envelope_404() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let req = test::TestRequest::get().uri("/api/no-such-thing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Endpoint not found");
}

#[actix_web::test]
async fn test_duplicate_email_registration_conflicts() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    register_user!(&app, "Alice", "alice@example.com", "student");

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "name": "Alice Again",
            "email": "alice@example.com",
            "password": "secret456",
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_register_missing_fields_rejected() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    // 空字段
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "", "email": "", "password": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // 缺失字段（JSON 反序列化层拒绝）
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({"name": "Bob"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_login_wrong_password_then_valid_token() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let registered = register_user!(&app, "Carol", "carol@example.com", "student");
    let registered_id = user_id_of(&registered);

    // 错误密码
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "carol@example.com", "password": "wrong-pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // 正确密码，返回的令牌可通过受保护端点并映射回同一用户
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "carol@example.com", "password": "secret123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let token = token_of(&body);

    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["id"].as_i64().unwrap(), registered_id);
}

#[actix_web::test]
async fn test_protected_route_rejects_bad_tokens() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    // 无令牌
    let req = test::TestRequest::get().uri("/api/courses").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // 伪造令牌
    let req = test::TestRequest::get()
        .uri("/api/courses")
        .insert_header(("Authorization", "Bearer not-a-real-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
}

#[actix_web::test]
async fn test_course_creation_is_teacher_only() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let student = register_user!(&app, "Sam Student", "sam@example.com", "student");
    let teacher = register_user!(&app, "Tina Teacher", "tina@example.com", "teacher");
    let teacher_id = user_id_of(&teacher);

    // 学生创建课程被拒
    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&student))))
        .set_json(json!({"title": "Forbidden 101"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // 教师创建课程成功，归属为本人
    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&teacher))))
        .set_json(json!({"title": "CS101", "description": "Intro"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["teacher_id"].as_i64().unwrap(), teacher_id);

    // 列表中教师名已解析
    let req = test::TestRequest::get()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&student))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let courses = body["data"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["teacher"], "Tina Teacher");
}

#[actix_web::test]
async fn test_enrollment_integrity_checks() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let teacher = register_user!(&app, "Ted Teacher", "ted@example.com", "teacher");
    let student = register_user!(&app, "Sue Student", "sue@example.com", "student");
    let student_token = token_of(&student);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&teacher))))
        .set_json(json!({"title": "Databases"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    // 课程不存在
    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"courseId": 9999}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);

    // 首次选课成功
    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // 重复选课冲突
    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    // 选课列表包含解析后的学生名与课程名
    let req = test::TestRequest::get()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["student"], "Sue Student");
    assert_eq!(rows[0]["course"], "Databases");
}

#[actix_web::test]
async fn test_assignment_listing_follows_enrollment() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let teacher = register_user!(&app, "Tom Teacher", "tom@example.com", "teacher");
    let enrolled = register_user!(&app, "Eva Enrolled", "eva@example.com", "student");
    let outsider = register_user!(&app, "Oscar Outside", "oscar@example.com", "student");
    let teacher_token = token_of(&teacher);

    // 两门课，学生只选其中一门
    let mut course_ids = Vec::new();
    for title in ["Algorithms", "Networks"] {
        let req = test::TestRequest::post()
            .uri("/api/courses")
            .insert_header(("Authorization", format!("Bearer {teacher_token}")))
            .set_json(json!({"title": title}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let body: Value = test::read_body_json(resp).await;
        course_ids.push(body["data"]["id"].as_i64().unwrap());
    }

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&enrolled))))
        .set_json(json!({"courseId": course_ids[0]}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // 每门课各一个作业
    for (title, course_id) in [("HW-A", course_ids[0]), ("HW-N", course_ids[1])] {
        let req = test::TestRequest::post()
            .uri("/api/assignments")
            .insert_header(("Authorization", format!("Bearer {teacher_token}")))
            .set_json(json!({"title": title, "courseId": course_id}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
    }

    // 已选课学生只看到所选课程的作业
    let req = test::TestRequest::get()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&enrolled))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "HW-A");
    assert_eq!(rows[0]["course"], "Algorithms");

    // 未选课学生得到空列表
    let req = test::TestRequest::get()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&outsider))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);

    // 教师看到自己创建的全部作业
    let req = test::TestRequest::get()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_assignment_due_date_validation_and_round_trip() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let teacher = register_user!(&app, "Dora Dates", "dora@example.com", "teacher");
    let teacher_token = token_of(&teacher);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Chrono"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    // 非法日期
    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Bad", "courseId": course_id, "dueDate": "not-a-date"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // 合法日期，存取后指向同一时刻
    let due = "2026-09-01T12:00:00Z";
    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Good", "courseId": course_id, "dueDate": due}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let req = test::TestRequest::get()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let stored = body["data"][0]["due_date"].as_str().unwrap();
    let expected = chrono::DateTime::parse_from_rfc3339(due).unwrap();
    let actual = chrono::DateTime::parse_from_rfc3339(stored).unwrap();
    assert_eq!(actual, expected);
}

#[actix_web::test]
async fn test_assignment_requires_own_course() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let owner = register_user!(&app, "Olive Owner", "olive@example.com", "teacher");
    let other = register_user!(&app, "Otto Other", "otto@example.com", "teacher");

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&owner))))
        .set_json(json!({"title": "Owned"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    // 其他教师不能在别人的课程里建作业
    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&other))))
        .set_json(json!({"title": "Hijack", "courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // 课程不存在
    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&other))))
        .set_json(json!({"title": "Ghost", "courseId": 4242}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_submission_requires_enrollment() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let teacher = register_user!(&app, "Tara Teach", "tara@example.com", "teacher");
    let student = register_user!(&app, "Nick NoEnroll", "nick@example.com", "student");
    let teacher_token = token_of(&teacher);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Gated"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "HW", "courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let assignment_id = body["data"]["id"].as_i64().unwrap();

    // 未选课的学生不能提交
    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&student))))
        .set_json(json!({"assignmentId": assignment_id, "content": "sneaky"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // 不存在的作业
    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&student))))
        .set_json(json!({"assignmentId": 777, "content": "void"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_full_workflow_register_to_grade() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    // 教师注册并开课
    let teacher = register_user!(&app, "Prof Turing", "turing@example.com", "teacher");
    let teacher_token = token_of(&teacher);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "CS101"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    // 学生注册并选课
    let student = register_user!(&app, "Student Ada", "ada@example.com", "student");
    let student_token = token_of(&student);

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // 教师布置作业
    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "HW1", "courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let assignment_id = body["data"]["id"].as_i64().unwrap();

    // 学生提交
    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"assignmentId": assignment_id, "content": "done"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let body: Value = test::read_body_json(resp).await;
    let submission_id = body["data"]["id"].as_i64().unwrap();

    // 学生不能评分
    let req = test::TestRequest::post()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"submissionId": submission_id, "grade": "A+"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // 教师评分
    let req = test::TestRequest::post()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"submissionId": submission_id, "grade": "A", "feedback": "good"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // 学生恰好看到一条评分
    let req = test::TestRequest::get()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["grade"], "A");
    assert_eq!(rows[0]["feedback"], "good");
    assert_eq!(rows[0]["submission"].as_i64().unwrap(), submission_id);
}

#[actix_web::test]
async fn test_regrade_replaces_previous_grade() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let teacher = register_user!(&app, "Grace Grader", "grace@example.com", "teacher");
    let student = register_user!(&app, "Rita Redo", "rita@example.com", "student");
    let teacher_token = token_of(&teacher);
    let student_token = token_of(&student);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Revisions"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"courseId": course_id}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Draft", "courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let assignment_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"assignmentId": assignment_id, "content": "v1"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let submission_id = body["data"]["id"].as_i64().unwrap();

    // 第一次评分
    let req = test::TestRequest::post()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"submissionId": submission_id, "grade": "C", "feedback": "rough"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // 重新评分覆盖旧记录
    let req = test::TestRequest::post()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"submissionId": submission_id, "grade": "B+", "feedback": "better"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    // 学生只看到最新的一条
    let req = test::TestRequest::get()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let rows = body["data"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["grade"], "B+");
    assert_eq!(rows[0]["feedback"], "better");
}

#[actix_web::test]
async fn test_grading_limited_to_own_assignments() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let owner = register_user!(&app, "Owen Owner", "owen@example.com", "teacher");
    let intruder = register_user!(&app, "Iris Intruder", "iris@example.com", "teacher");
    let student = register_user!(&app, "Sal Solver", "sal@example.com", "student");
    let owner_token = token_of(&owner);
    let student_token = token_of(&student);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {owner_token}")))
        .set_json(json!({"title": "Protected"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"courseId": course_id}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .insert_header(("Authorization", format!("Bearer {owner_token}")))
        .set_json(json!({"title": "Quiz", "courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let assignment_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/submissions")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .set_json(json!({"assignmentId": assignment_id, "content": "answer"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let submission_id = body["data"]["id"].as_i64().unwrap();

    // 别的教师不能评别人作业的提交
    let req = test::TestRequest::post()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&intruder))))
        .set_json(json!({"submissionId": submission_id, "grade": "F"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 403);

    // 不存在的提交
    let req = test::TestRequest::post()
        .uri("/api/grades")
        .insert_header(("Authorization", format!("Bearer {owner_token}")))
        .set_json(json!({"submissionId": 31337, "grade": "A"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_profile_get_is_idempotent_and_update_is_partial() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let user = register_user!(&app, "Pat Profile", "pat@example.com", "student");
    let token = token_of(&user);

    // 两次读取返回一致数据
    let mut bodies = Vec::new();
    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri("/api/auth/profile")
            .insert_header(("Authorization", format!("Bearer {token}")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        bodies.push(body["data"]["user"].clone());
    }
    assert_eq!(bodies[0], bodies[1]);

    // 只更新 bio，name 保持不变
    let req = test::TestRequest::put()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"bio": "rustacean"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["name"], "Pat Profile");
    assert_eq!(body["data"]["user"]["bio"], "rustacean");

    // bio 可显式置空
    let req = test::TestRequest::put()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({"bio": ""}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["user"]["bio"], "");
}

#[actix_web::test]
async fn test_refresh_token_issues_usable_token() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let user = register_user!(&app, "Rex Refresh", "rex@example.com", "student");
    let token = token_of(&user);

    let req = test::TestRequest::post()
        .uri("/api/auth/refresh")
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    let new_token = body["data"]["access_token"].as_str().unwrap().to_string();

    // 新令牌可用于受保护端点
    let req = test::TestRequest::get()
        .uri("/api/auth/profile")
        .insert_header(("Authorization", format!("Bearer {new_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_web::test]
async fn test_dashboard_is_role_aware() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let teacher = register_user!(&app, "Dan Dash", "dan@example.com", "teacher");
    let student = register_user!(&app, "Dina Dash", "dina@example.com", "student");
    let teacher_token = token_of(&teacher);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Dashboards"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&student))))
        .set_json(json!({"courseId": course_id}))
        .to_request();
    test::call_service(&app, req).await;

    // 教师看到所授课程
    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["courses"].as_array().unwrap().len(), 1);

    // 学生看到已选课程
    let req = test::TestRequest::get()
        .uri("/api/dashboard")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&student))))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let courses = body["data"]["courses"].as_array().unwrap();
    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0]["title"], "Dashboards");
}

#[actix_web::test]
async fn test_course_detail_resolves_teacher_and_count() {
    let (storage, codec) = test_context().await;
    let app = init_app!(storage, codec);

    let teacher = register_user!(&app, "Cora Counter", "cora@example.com", "teacher");
    let student = register_user!(&app, "Carl Counted", "carl@example.com", "student");
    let teacher_token = token_of(&teacher);

    let req = test::TestRequest::post()
        .uri("/api/courses")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .set_json(json!({"title": "Counting"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let course_id = body["data"]["id"].as_i64().unwrap();

    let req = test::TestRequest::post()
        .uri("/api/enrollments")
        .insert_header(("Authorization", format!("Bearer {}", token_of(&student))))
        .set_json(json!({"courseId": course_id}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/courses/{course_id}"))
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["teacher"], "Cora Counter");
    assert_eq!(body["data"]["enrolled_count"].as_i64().unwrap(), 1);

    // 不存在的课程
    let req = test::TestRequest::get()
        .uri("/api/courses/31337")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
