use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_master_data_tables::Migration),
            Box::new(m20260101_000002_create_purchase_order_tables::Migration),
            Box::new(m20260101_000003_create_goods_receipt_tables::Migration),
            Box::new(m20260101_000004_create_invoice_tables::Migration),
            Box::new(m20260101_000005_create_audit_records_table::Migration),
        ]
    }
}

// Migration implementations

mod m20260101_000001_create_master_data_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000001_create_master_data_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Vendors::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Vendors::VmId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Vendors::Code).string().not_null().unique_key())
                        .col(ColumnDef::new(Vendors::Name).string().null())
                        .col(ColumnDef::new(Vendors::GstNo).string().not_null())
                        .col(
                            ColumnDef::new(Vendors::IsActive)
                                .string_len(16)
                                .not_null()
                                .default("inactive"),
                        )
                        .col(
                            ColumnDef::new(Vendors::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Vendors::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(Materials::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Materials::MmId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Materials::Code)
                                .string()
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Materials::Description).string().null())
                        .col(ColumnDef::new(Materials::GstNo).string().not_null())
                        .col(
                            ColumnDef::new(Materials::StdPrice)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(Materials::IsActive)
                                .string_len(16)
                                .not_null()
                                .default("inactive"),
                        )
                        .col(
                            ColumnDef::new(Materials::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Materials::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_vendors_is_active")
                        .table(Vendors::Table)
                        .col(Vendors::IsActive)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_materials_is_active")
                        .table(Materials::Table)
                        .col(Materials::IsActive)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Materials::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(Vendors::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Vendors {
        Table,
        VmId,
        Code,
        Name,
        GstNo,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum Materials {
        Table,
        MmId,
        Code,
        Description,
        GstNo,
        StdPrice,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20260101_000002_create_purchase_order_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000002_create_purchase_order_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PoHeaders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PoHeaders::PoId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(PoHeaders::VendorId).string().null())
                        .col(
                            ColumnDef::new(PoHeaders::Status)
                                .string_len(16)
                                .not_null()
                                .default("draft"),
                        )
                        .col(
                            ColumnDef::new(PoHeaders::DocDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PoHeaders::TotalValue)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(PoHeaders::ApprovedBy).string().null())
                        .col(
                            ColumnDef::new(PoHeaders::ApprovedAt)
                                .timestamp_with_time_zone()
                                .null(),
                        )
                        .col(ColumnDef::new(PoHeaders::Remarks).text().null())
                        .col(
                            ColumnDef::new(PoHeaders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PoHeaders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(PoItems::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(PoItems::PoId).string().not_null())
                        .col(ColumnDef::new(PoItems::LineNumber).integer().not_null())
                        .col(ColumnDef::new(PoItems::MaterialId).string().null())
                        .col(ColumnDef::new(PoItems::OrderedQty).decimal().not_null())
                        .col(ColumnDef::new(PoItems::NetPrice).decimal().not_null())
                        .col(
                            ColumnDef::new(PoItems::DiscountPct)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PoItems::GstPct)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PoItems::NetpriceValue)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PoItems::ReceivedQty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PoItems::OpenQty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PoItems::Status)
                                .string_len(24)
                                .not_null()
                                .default("open"),
                        )
                        .col(
                            ColumnDef::new(PoItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PoItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .name("pk_po_items")
                                .col(PoItems::PoId)
                                .col(PoItems::LineNumber),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_po_items_po_id")
                                .from(PoItems::Table, PoItems::PoId)
                                .to(PoHeaders::Table, PoHeaders::PoId)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_po_headers_vendor_id")
                        .table(PoHeaders::Table)
                        .col(PoHeaders::VendorId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_po_headers_status")
                        .table(PoHeaders::Table)
                        .col(PoHeaders::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_po_items_material_id")
                        .table(PoItems::Table)
                        .col(PoItems::MaterialId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PoItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PoHeaders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum PoHeaders {
        Table,
        PoId,
        VendorId,
        Status,
        DocDate,
        TotalValue,
        ApprovedBy,
        ApprovedAt,
        Remarks,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum PoItems {
        Table,
        PoId,
        LineNumber,
        MaterialId,
        OrderedQty,
        NetPrice,
        DiscountPct,
        GstPct,
        NetpriceValue,
        ReceivedQty,
        OpenQty,
        Status,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20260101_000003_create_goods_receipt_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000003_create_goods_receipt_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(GrHeaders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(GrHeaders::GrId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(GrHeaders::GrDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GrHeaders::Status)
                                .string_len(16)
                                .not_null()
                                .default("draft"),
                        )
                        .col(ColumnDef::new(GrHeaders::Remarks).text().null())
                        .col(
                            ColumnDef::new(GrHeaders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GrHeaders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // No foreign key on (po_id, po_line_number): receipts against an
            // unknown PO line are accepted and reported during reconciliation.
            manager
                .create_table(
                    Table::create()
                        .table(GrItems::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(GrItems::GrId).string().not_null())
                        .col(ColumnDef::new(GrItems::LineNumber).integer().not_null())
                        .col(ColumnDef::new(GrItems::PoId).string().not_null())
                        .col(ColumnDef::new(GrItems::PoLineNumber).integer().not_null())
                        .col(ColumnDef::new(GrItems::ReceivedQty).decimal().not_null())
                        .col(
                            ColumnDef::new(GrItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(GrItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .name("pk_gr_items")
                                .col(GrItems::GrId)
                                .col(GrItems::LineNumber),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_gr_items_gr_id")
                                .from(GrItems::Table, GrItems::GrId)
                                .to(GrHeaders::Table, GrHeaders::GrId)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_gr_items_po_line")
                        .table(GrItems::Table)
                        .col(GrItems::PoId)
                        .col(GrItems::PoLineNumber)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(GrItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(GrHeaders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum GrHeaders {
        Table,
        GrId,
        GrDate,
        Status,
        Remarks,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum GrItems {
        Table,
        GrId,
        LineNumber,
        PoId,
        PoLineNumber,
        ReceivedQty,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20260101_000004_create_invoice_tables {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000004_create_invoice_tables"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(InvoiceHeaders::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(InvoiceHeaders::InvId)
                                .string()
                                .not_null()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(InvoiceHeaders::InvoiceNumber).string().null())
                        .col(ColumnDef::new(InvoiceHeaders::PoId).string().null())
                        .col(
                            ColumnDef::new(InvoiceHeaders::InvDate)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceHeaders::Status)
                                .string_len(16)
                                .not_null()
                                .default("draft"),
                        )
                        .col(
                            ColumnDef::new(InvoiceHeaders::TotalamtBefore)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceHeaders::Taxamt)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceHeaders::TotalAmount)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceHeaders::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceHeaders::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(InvoiceItems::Table)
                        .if_not_exists()
                        .col(ColumnDef::new(InvoiceItems::InvId).string().not_null())
                        .col(ColumnDef::new(InvoiceItems::LineNumber).integer().not_null())
                        .col(ColumnDef::new(InvoiceItems::PoId).string().null())
                        .col(ColumnDef::new(InvoiceItems::PoLineNumber).integer().null())
                        .col(ColumnDef::new(InvoiceItems::InvoicedQty).decimal().not_null())
                        .col(ColumnDef::new(InvoiceItems::NetPrice).decimal().not_null())
                        .col(
                            ColumnDef::new(InvoiceItems::DiscountPct)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::GstPct)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::Netamt)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::Taxamt)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::Totalamt)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(InvoiceItems::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .primary_key(
                            Index::create()
                                .name("pk_invoice_items")
                                .col(InvoiceItems::InvId)
                                .col(InvoiceItems::LineNumber),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_invoice_items_inv_id")
                                .from(InvoiceItems::Table, InvoiceItems::InvId)
                                .to(InvoiceHeaders::Table, InvoiceHeaders::InvId)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_invoice_items_po_line")
                        .table(InvoiceItems::Table)
                        .col(InvoiceItems::PoId)
                        .col(InvoiceItems::PoLineNumber)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(InvoiceItems::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(InvoiceHeaders::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum InvoiceHeaders {
        Table,
        InvId,
        InvoiceNumber,
        PoId,
        InvDate,
        Status,
        TotalamtBefore,
        Taxamt,
        TotalAmount,
        CreatedAt,
        UpdatedAt,
    }

    #[derive(DeriveIden)]
    enum InvoiceItems {
        Table,
        InvId,
        LineNumber,
        PoId,
        PoLineNumber,
        InvoicedQty,
        NetPrice,
        DiscountPct,
        GstPct,
        Netamt,
        Taxamt,
        Totalamt,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20260101_000005_create_audit_records_table {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20260101_000005_create_audit_records_table"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(AuditRecords::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(AuditRecords::Id)
                                .uuid()
                                .not_null()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(AuditRecords::TargetDocumentId)
                                .string()
                                .not_null(),
                        )
                        .col(ColumnDef::new(AuditRecords::DocumentType).string().not_null())
                        .col(ColumnDef::new(AuditRecords::Event).string_len(16).not_null())
                        .col(ColumnDef::new(AuditRecords::StatusLabel).string().not_null())
                        .col(ColumnDef::new(AuditRecords::Actor).string().not_null())
                        .col(
                            ColumnDef::new(AuditRecords::RecordedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_audit_records_target_document_id")
                        .table(AuditRecords::Table)
                        .col(AuditRecords::TargetDocumentId)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(AuditRecords::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum AuditRecords {
        Table,
        Id,
        TargetDocumentId,
        DocumentType,
        Event,
        StatusLabel,
        Actor,
        RecordedAt,
    }
}
