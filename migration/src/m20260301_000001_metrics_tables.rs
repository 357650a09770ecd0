use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // watch_metrics：每个 (ip_hash, video_id) 至多一行
        manager
            .create_table(
                Table::create()
                    .table(WatchMetric::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(WatchMetric::IpHash).string().not_null())
                    .col(ColumnDef::new(WatchMetric::VideoId).string().not_null())
                    .col(
                        ColumnDef::new(WatchMetric::LastWatchTime)
                            .double()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WatchMetric::UpdatedAt).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(WatchMetric::IpHash)
                            .col(WatchMetric::VideoId),
                    )
                    .to_owned(),
            )
            .await?;

        // 读取路径按 updated_at 升序排序
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_watch_metrics_video_updated")
                    .table(WatchMetric::Table)
                    .col(WatchMetric::VideoId)
                    .col(WatchMetric::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        // quiz_metrics：结构与 watch_metrics 相同
        manager
            .create_table(
                Table::create()
                    .table(QuizMetric::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(QuizMetric::IpHash).string().not_null())
                    .col(ColumnDef::new(QuizMetric::QuizId).string().not_null())
                    .col(ColumnDef::new(QuizMetric::Score).double().not_null())
                    .col(ColumnDef::new(QuizMetric::UpdatedAt).big_integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(QuizMetric::IpHash)
                            .col(QuizMetric::QuizId),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_quiz_metrics_quiz_updated")
                    .table(QuizMetric::Table)
                    .col(QuizMetric::QuizId)
                    .col(QuizMetric::UpdatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_quiz_metrics_quiz_updated").to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_watch_metrics_video_updated").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(QuizMetric::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(WatchMetric::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WatchMetric {
    #[sea_orm(iden = "watch_metrics")]
    Table,
    IpHash,
    VideoId,
    LastWatchTime,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum QuizMetric {
    #[sea_orm(iden = "quiz_metrics")]
    Table,
    IpHash,
    QuizId,
    Score,
    UpdatedAt,
}
